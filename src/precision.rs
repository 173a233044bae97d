//! Precision budget for arbitrary-precision arithmetic.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use bigdecimal::BigDecimal;
use thiserror::Error;

/// Number of significant digits retained by default.
pub const DEFAULT_DIGITS: u64 = 100;

/// How many digits of each freshly computed value are retained.
///
/// [Precision::Exact] never rounds, so every product carries all of its digits and the cost of
/// each multiplication grows with the number of events. [Precision::Digits] rounds each computed
/// value to a fixed number of significant digits, keeping the cost bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Exact,
    Digits(u64),
}
impl Precision {
    #[inline]
    pub fn apply(&self, value: BigDecimal) -> BigDecimal {
        match self {
            Precision::Exact => value,
            Precision::Digits(digits) => {
                if value.digits() > *digits {
                    value.with_prec(*digits)
                } else {
                    value
                }
            }
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::Digits(DEFAULT_DIGITS)
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Precision::Exact => write!(f, "exact"),
            Precision::Digits(digits) => write!(f, "{digits}"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid precision '{0}': expected 'exact' or a positive number of significant digits")]
pub struct PrecisionParseError(pub String);

impl FromStr for Precision {
    type Err = PrecisionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("exact") {
            return Ok(Precision::Exact);
        }
        match trimmed.parse::<u64>() {
            Ok(digits) if digits > 0 => Ok(Precision::Digits(digits)),
            _ => Err(PrecisionParseError(s.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_exact() {
        let value = BigDecimal::from_str("0.123456789123456789").unwrap();
        assert_eq!(value, Precision::Exact.apply(value.clone()));
    }

    #[test]
    fn apply_digits() {
        let value = BigDecimal::from_str("0.123456789123456789").unwrap();
        assert_eq!(
            BigDecimal::from_str("0.1235").unwrap(),
            Precision::Digits(4).apply(value)
        );
    }

    #[test]
    fn apply_digits_leaves_short_values() {
        let value = BigDecimal::from_str("0.25").unwrap();
        let applied = Precision::Digits(10).apply(value.clone());
        assert_eq!(value, applied);
        assert_eq!(2, applied.digits());
    }

    #[test]
    fn apply_digits_keeps_tiny_magnitudes() {
        let value = BigDecimal::from_str("1.23456e-300").unwrap();
        assert_eq!(
            BigDecimal::from_str("1.23e-300").unwrap(),
            Precision::Digits(3).apply(value)
        );
    }

    #[test]
    fn parse() {
        assert_eq!(Ok(Precision::Exact), Precision::from_str("exact"));
        assert_eq!(Ok(Precision::Exact), Precision::from_str(" EXACT "));
        assert_eq!(Ok(Precision::Digits(64)), Precision::from_str("64"));
        assert_eq!(
            Err(PrecisionParseError("0".into())),
            Precision::from_str("0")
        );
        assert_eq!(
            Err(PrecisionParseError("-3".into())),
            Precision::from_str("-3")
        );
        assert!(Precision::from_str("lots").is_err());
    }

    #[test]
    fn display() {
        assert_eq!("exact", Precision::Exact.to_string());
        assert_eq!("100", Precision::default().to_string());
    }
}
