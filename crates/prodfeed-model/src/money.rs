//! Fixed-point money for product prices.
//!
//! Prices are held as whole minor units (pence), so the ignore-rule
//! thresholds compare exactly instead of through floating point.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing a decimal price string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParsePriceError {
    /// The input was the empty string.
    #[error("empty price string")]
    Empty,

    /// The input was not an optionally signed decimal number.
    #[error("invalid price syntax: {0:?}")]
    Invalid(String),

    /// The value does not fit in the minor-unit range.
    #[error("price out of range: {0:?}")]
    OutOfRange(String),
}

/// A price in pounds sterling, stored as whole pence.
///
/// Parsing truncates anything beyond two fractional digits, so `"4.999"`
/// and `"4.99"` are the same price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Build a price directly from minor units (pence).
    pub const fn from_minor_units(minor: i64) -> Self {
        Self(minor)
    }

    /// The price in minor units (pence).
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl FromStr for Price {
    type Err = ParsePriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParsePriceError::Empty);
        }
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (whole, frac) = match unsigned.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (unsigned, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(ParsePriceError::Invalid(s.to_string()));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParsePriceError::Invalid(s.to_string()));
        }

        let mut minor: i64 = 0;
        for digit in whole.bytes() {
            minor = minor
                .checked_mul(10)
                .and_then(|value| value.checked_add(i64::from(digit - b'0')))
                .ok_or_else(|| ParsePriceError::OutOfRange(s.to_string()))?;
        }
        minor = minor
            .checked_mul(100)
            .ok_or_else(|| ParsePriceError::OutOfRange(s.to_string()))?;

        // Two fractional digits carry value; the rest truncate.
        let mut frac_digits = frac.bytes();
        let tens = frac_digits.next().map_or(0, |b| i64::from(b - b'0'));
        let units = frac_digits.next().map_or(0, |b| i64::from(b - b'0'));
        minor = minor
            .checked_add(tens * 10 + units)
            .ok_or_else(|| ParsePriceError::OutOfRange(s.to_string()))?;

        Ok(Self(if negative { -minor } else { minor }))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl serde::Serialize for Price {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Price {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_plain_decimal() {
        let price: Price = "4.99".parse().unwrap();
        assert_eq!(price.minor_units(), 499);
    }

    #[test]
    fn test_parse_whole_number() {
        let price: Price = "1000".parse().unwrap();
        assert_eq!(price.minor_units(), 100_000);
    }

    #[test]
    fn test_parse_single_fractional_digit() {
        let price: Price = "5.1".parse().unwrap();
        assert_eq!(price.minor_units(), 510);
    }

    #[test]
    fn test_parse_truncates_extra_fraction() {
        let price: Price = "4.999".parse().unwrap();
        assert_eq!(price.minor_units(), 499);
    }

    #[test]
    fn test_parse_bare_fraction_and_trailing_dot() {
        assert_eq!(".5".parse::<Price>().unwrap().minor_units(), 50);
        assert_eq!("5.".parse::<Price>().unwrap().minor_units(), 500);
    }

    #[test]
    fn test_parse_signs() {
        assert_eq!("+2.50".parse::<Price>().unwrap().minor_units(), 250);
        assert_eq!("-2.50".parse::<Price>().unwrap().minor_units(), -250);
        assert!("-2.50".parse::<Price>().unwrap().is_negative());
    }

    #[test]
    fn test_parse_rejects_empty_and_garbage() {
        assert_eq!("".parse::<Price>(), Err(ParsePriceError::Empty));
        assert!(matches!(".".parse::<Price>(), Err(ParsePriceError::Invalid(_))));
        assert!(matches!("+".parse::<Price>(), Err(ParsePriceError::Invalid(_))));
        assert!(matches!("1.2.3".parse::<Price>(), Err(ParsePriceError::Invalid(_))));
        assert!(matches!("12a".parse::<Price>(), Err(ParsePriceError::Invalid(_))));
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let huge = "9".repeat(30);
        assert!(matches!(
            huge.parse::<Price>(),
            Err(ParsePriceError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_display_pads_pence() {
        assert_eq!(Price::from_minor_units(500).to_string(), "5.00");
        assert_eq!(Price::from_minor_units(7).to_string(), "0.07");
        assert_eq!(Price::from_minor_units(-499).to_string(), "-4.99");
    }

    #[test]
    fn test_ordering_is_exact() {
        let low: Price = "4.99".parse().unwrap();
        let limit = Price::from_minor_units(5_00);
        assert!(low < limit);
        assert!("5.00".parse::<Price>().unwrap() >= limit);
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let price = Price::from_minor_units(100_001);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"1000.01\"");
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }

    proptest! {
        #[test]
        fn test_canonical_string_round_trips(pounds in 0i64..=10_000_000, pence in 0i64..=99) {
            let text = format!("{pounds}.{pence:02}");
            let price: Price = text.parse().unwrap();
            prop_assert_eq!(price.minor_units(), pounds * 100 + pence);
            prop_assert_eq!(price.to_string(), text);
        }
    }
}
