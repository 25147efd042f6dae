use std::path::Path;

use crate::problem::{City, Ride};

use super::hashcode::ParseError;

pub trait InstanceParser {
    fn parse(&self, text: &str) -> Result<(City, Vec<Ride>), ParseError>;

    fn from_file<P: AsRef<Path>>(&self, path: P) -> Result<(City, Vec<Ride>), ParseError> {
        let text = std::fs::read_to_string(path)?;
        self.parse(&text)
    }
}
