pub mod hashcode;
pub mod parser;

pub use hashcode::{HashCodeParser, ParseError, parse};
pub use parser::InstanceParser;
