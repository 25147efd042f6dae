use thiserror::Error;

use crate::problem::{City, Ride, RideIdx};

use super::parser::InstanceParser;

/// Parser for the Hash Code self-driving-rides text format.
///
/// Line 1 holds `ROWS COLS CARS RIDES BONUS STEPS`; every following line
/// holds one ride as `A B X Y START END`. All fields are non-negative
/// integers.
pub struct HashCodeParser;

impl InstanceParser for HashCodeParser {
    fn parse(&self, text: &str) -> Result<(City, Vec<Ride>), ParseError> {
        parse(text)
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed header line: expected 6 fields, found {found}")]
    MalformedHeader { found: usize },

    #[error("malformed ride on line {line}: expected 6 fields, found {found}")]
    MalformedRide { line: usize, found: usize },

    #[error("non-integer field '{field}' on line {line}")]
    NonIntegerField { line: usize, field: String },

    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),
}

fn parse_fields(line: &str, line_number: usize) -> Result<[u64; 6], ParseError> {
    let mut fields = [0u64; 6];
    let mut count = 0;

    for token in line.split_whitespace() {
        if count < 6 {
            fields[count] = token.parse().map_err(|_| ParseError::NonIntegerField {
                line: line_number,
                field: token.to_string(),
            })?;
        }
        count += 1;
    }

    if count != 6 {
        if line_number == 1 {
            return Err(ParseError::MalformedHeader { found: count });
        }
        return Err(ParseError::MalformedRide {
            line: line_number,
            found: count,
        });
    }

    Ok(fields)
}

/// Parses an instance. Fails fast on the first offending line; there is no
/// partial-parse recovery.
pub fn parse(text: &str) -> Result<(City, Vec<Ride>), ParseError> {
    let mut lines = text.trim().lines();

    let header = lines.next().unwrap_or("");
    let [rows, cols, cars, ride_count, bonus, steps] = parse_fields(header, 1)?;
    let city = City::new(rows, cols, cars, ride_count, bonus, steps);

    let mut rides = Vec::new();
    for (position, line) in lines.enumerate() {
        let [a, b, x, y, start, end] = parse_fields(line, position + 2)?;
        // Ride identity is the 0-based input position, fixed here once.
        rides.push(Ride::new(RideIdx::new(position), a, b, x, y, start, end));
    }

    Ok((city, rides))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3 4 2 3 2 10\n0 0 1 3 2 9\n0 0 1 1 1 9\n";

    #[test]
    fn test_parse_city() {
        let (city, _) = parse(SAMPLE).unwrap();

        assert_eq!(city.rows(), 3);
        assert_eq!(city.cols(), 4);
        assert_eq!(city.cars(), 2);
        assert_eq!(city.rides(), 3);
        assert_eq!(city.bonus(), 2);
        assert_eq!(city.steps(), 10);
    }

    #[test]
    fn test_parse_rides_keep_input_order() {
        let (_, rides) = parse(SAMPLE).unwrap();

        assert_eq!(rides.len(), 2);

        let first = rides[0];
        assert_eq!(first.index(), RideIdx::new(0));
        assert_eq!((first.a(), first.b()), (0, 0));
        assert_eq!((first.x(), first.y()), (1, 3));
        assert_eq!((first.start(), first.end()), (2, 9));

        let second = rides[1];
        assert_eq!(second.index(), RideIdx::new(1));
        assert_eq!((second.x(), second.y()), (1, 1));
        assert_eq!((second.start(), second.end()), (1, 9));
    }

    #[test]
    fn test_parse_bad_header() {
        assert!(matches!(
            parse("foo"),
            Err(ParseError::NonIntegerField { line: 1, .. })
        ));
        assert!(matches!(
            parse("3 4 2 3 2"),
            Err(ParseError::MalformedHeader { found: 5 })
        ));
        assert!(matches!(
            parse(""),
            Err(ParseError::MalformedHeader { found: 0 })
        ));
        assert!(matches!(
            parse("3 4 2 3 2 10 7"),
            Err(ParseError::MalformedHeader { found: 7 })
        ));
    }

    #[test]
    fn test_parse_bad_ride() {
        assert!(matches!(
            parse("3 4 2 3 2 10\n0 0 1 3 2"),
            Err(ParseError::MalformedRide { line: 2, found: 5 })
        ));
        assert!(matches!(
            parse("3 4 2 3 2 10\n0 0 1 3 2 9\n0 0 one 1 1 9"),
            Err(ParseError::NonIntegerField { line: 3, .. })
        ));
        // A negative coordinate is not a valid field in this format.
        assert!(matches!(
            parse("3 4 2 3 2 10\n0 0 -1 3 2 9"),
            Err(ParseError::NonIntegerField { line: 2, .. })
        ));
    }

    #[test]
    fn test_parse_trailing_whitespace() {
        let (city, rides) = parse("3 4 2 3 2 10\n0 0 1 3 2 9\n\n").unwrap();
        assert_eq!(city.rows(), 3);
        assert_eq!(rides.len(), 1);
    }
}
