//! Conversion between decimal text and integer hundredths.

use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of minor units in one major unit.
pub const MINOR_PER_MAJOR: i64 = 100;
const MINOR_SCALE: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("`{0}` is not a decimal amount")]
    Malformed(String),
    #[error("`{0}` is negative")]
    Negative(String),
    #[error("`{0}` is out of range")]
    OutOfRange(String),
}

/// Monetary amount stored as an integer count of hundredths.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MinorUnits(pub i64);

impl MinorUnits {
    pub const ZERO: MinorUnits = MinorUnits(0);

    /// Parses a non-negative decimal numeral such as `25`, `25.5` or `25.00`.
    ///
    /// The value is scaled by one hundred and truncated toward zero, so any
    /// digits past the second decimal place are dropped (`1.239` is 123).
    pub fn parse(text: &str) -> Result<Self, AmountError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AmountError::Empty);
        }
        // `Decimal` accepts `_` digit separators; plain numerals only.
        if trimmed.contains('_') {
            return Err(AmountError::Malformed(trimmed.to_string()));
        }
        let value = Decimal::from_str(trimmed)
            .map_err(|_| AmountError::Malformed(trimmed.to_string()))?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative(trimmed.to_string()));
        }
        value
            .checked_mul(Decimal::from(MINOR_PER_MAJOR))
            .and_then(|scaled| scaled.trunc().to_i64())
            .map(MinorUnits)
            .ok_or_else(|| AmountError::OutOfRange(trimmed.to_string()))
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn checked_add(self, other: MinorUnits) -> Option<MinorUnits> {
        self.0.checked_add(other.0).map(MinorUnits)
    }

    pub fn checked_sub(self, other: MinorUnits) -> Option<MinorUnits> {
        self.0.checked_sub(other.0).map(MinorUnits)
    }

    fn as_decimal(self) -> Decimal {
        Decimal::new(self.0, MINOR_SCALE)
    }
}

impl FromStr for MinorUnits {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MinorUnits::parse(s)
    }
}

/// Renders the amount in major units with exactly two decimal digits.
impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.as_decimal())
    }
}

pub fn parse_amount(text: &str) -> Result<MinorUnits, AmountError> {
    MinorUnits::parse(text)
}

pub fn format_amount(amount: MinorUnits) -> String {
    amount.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!(parse_amount("25"), Ok(MinorUnits(2500)));
        assert_eq!(parse_amount("25.5"), Ok(MinorUnits(2550)));
        assert_eq!(parse_amount("25.00"), Ok(MinorUnits(2500)));
        assert_eq!(parse_amount("2.5"), Ok(MinorUnits(250)));
        assert_eq!(parse_amount(" 1.00 "), Ok(MinorUnits(100)));
    }

    #[test]
    fn parsing_is_exact_for_two_decimal_places() {
        assert_eq!(parse_amount("0.29"), Ok(MinorUnits(29)));
        assert_eq!(parse_amount("4.35"), Ok(MinorUnits(435)));
        assert_eq!(parse_amount("1.15"), Ok(MinorUnits(115)));
    }

    #[test]
    fn extra_fraction_digits_truncate_toward_zero() {
        assert_eq!(parse_amount("1.239"), Ok(MinorUnits(123)));
        assert_eq!(parse_amount("0.009"), Ok(MinorUnits(0)));
    }

    #[test]
    fn rejects_malformed_and_negative_input() {
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
        assert_eq!(parse_amount("   "), Err(AmountError::Empty));
        assert!(matches!(parse_amount("abc"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount("1.2.3"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount("1_0"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount("2.5_0"), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_amount("-1.00"), Err(AmountError::Negative(_))));
    }

    #[test]
    fn rejects_amounts_beyond_i64() {
        assert!(matches!(
            parse_amount("100000000000000000000"),
            Err(AmountError::OutOfRange(_))
        ));
    }

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(format_amount(MinorUnits(0)), "0.00");
        assert_eq!(format_amount(MinorUnits(5)), "0.05");
        assert_eq!(format_amount(MinorUnits(250)), "2.50");
        assert_eq!(format_amount(MinorUnits(123_456)), "1234.56");
        assert_eq!(format_amount(MinorUnits(-5)), "-0.05");
    }

    #[test]
    fn format_of_parse_is_canonical() {
        let cases = [
            ("25", "25.00"),
            ("25.5", "25.50"),
            ("25.00", "25.00"),
            ("0.1", "0.10"),
            ("0.07", "0.07"),
            ("19.99", "19.99"),
            ("1000", "1000.00"),
        ];
        for (input, expected) in cases {
            let parsed = parse_amount(input).expect("valid amount");
            assert_eq!(format_amount(parsed), expected, "input {input}");
        }
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&MinorUnits(250)).expect("serialize");
        assert_eq!(json, "250");
        let parsed: MinorUnits = serde_json::from_str("-40").expect("deserialize");
        assert_eq!(parsed, MinorUnits(-40));
    }
}
