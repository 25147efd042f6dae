use jiff::SpanRelativeTo;
use phaeton_engine::solver::AssignStrategy;

pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return Ok(jiff::SignedDuration::from_secs(seconds.abs()));
    }

    Err(String::from("Invalid duration"))
}

pub fn parse_strategy(input: &str) -> Result<AssignStrategy, String> {
    match input.to_ascii_lowercase().as_str() {
        "round-robin" | "rr" => Ok(AssignStrategy::RoundRobin),
        "greedy-value" | "greedy" => Ok(AssignStrategy::GreedyValue),
        _ => Err(String::from(
            "expected 'round-robin' or 'greedy-value'",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!(
            parse_strategy("rr").unwrap(),
            AssignStrategy::RoundRobin
        );
        assert_eq!(
            parse_strategy("Greedy-Value").unwrap(),
            AssignStrategy::GreedyValue
        );
        assert!(parse_strategy("optimal").is_err());
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(
            parse_duration("30s").unwrap(),
            jiff::SignedDuration::from_secs(30)
        );
        assert_eq!(
            parse_duration("5").unwrap(),
            jiff::SignedDuration::from_secs(5)
        );
        assert!(parse_duration("soon").is_err());
    }
}
