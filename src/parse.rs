//! Parsing of probabilities from decimal literals.

use std::str::FromStr;

use bigdecimal::{BigDecimal, ParseBigDecimalError};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("malformed probability '{literal}' at position {index}: {source}")]
pub struct ParseError {
    pub literal: String,
    pub index: usize,
    #[source]
    pub source: ParseBigDecimalError,
}

/// Parses a single decimal literal, ignoring surrounding whitespace.
pub fn parse_probability(literal: &str) -> Result<BigDecimal, ParseBigDecimalError> {
    BigDecimal::from_str(literal.trim())
}

/// Parses every literal in turn, failing on the first one that is not a decimal number. Values are
/// not range-checked.
pub fn parse_probabilities(literals: &[impl AsRef<str>]) -> Result<Vec<BigDecimal>, ParseError> {
    literals
        .iter()
        .enumerate()
        .map(|(index, literal)| {
            let literal = literal.as_ref();
            parse_probability(literal).map_err(|source| ParseError {
                literal: literal.into(),
                index,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all() {
        let probs = parse_probabilities(&["0.1", " 0.25 ", "1", "0", "1e-6"]).unwrap();
        assert_eq!(
            vec![
                BigDecimal::from_str("0.1").unwrap(),
                BigDecimal::from_str("0.25").unwrap(),
                BigDecimal::from(1),
                BigDecimal::from(0),
                BigDecimal::from_str("0.000001").unwrap(),
            ],
            probs
        );
    }

    #[test]
    fn parse_empty() {
        let literals: [&str; 0] = [];
        assert!(parse_probabilities(&literals).unwrap().is_empty());
    }

    #[test]
    fn parse_out_of_range_is_not_an_error() {
        let probs = parse_probabilities(&["-0.5", "1.5"]).unwrap();
        assert_eq!(2, probs.len());
    }

    #[test]
    fn parse_reports_first_malformed() {
        let err = parse_probabilities(&["0.1".to_string(), "0.x".into(), "bad".into()])
            .unwrap_err();
        assert_eq!("0.x", err.literal);
        assert_eq!(1, err.index);
        assert!(
            err.to_string().starts_with("malformed probability '0.x' at position 1"),
            "unexpected message: {err}"
        );
    }

    #[test]
    fn parse_rejects_blank() {
        let err = parse_probabilities(&["0.5", "  "]).unwrap_err();
        assert_eq!(1, err.index);
    }
}
