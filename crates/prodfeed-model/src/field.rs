//! Typed field values flowing from raw CSV text into target records.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::money::Price;

/// A single field value at some point between mapping and entity build.
///
/// Mapping produces `Text` for every cell; translation replaces individual
/// values with typed variants or `Null`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Price(Price),
    Timestamp(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Human-readable kind, for diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Int(_) => "integer",
            FieldValue::Price(_) => "price",
            FieldValue::Timestamp(_) => "timestamp",
            FieldValue::Null => "null",
        }
    }
}

/// Errors from assigning a translated value to a target record field.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssignError {
    /// The field name does not exist on the target record at all. This is a
    /// configuration fault, not a data fault.
    #[error("no field named {field:?} on the target record")]
    UnknownField { field: String },

    /// The field exists but the value has the wrong type for it.
    #[error("{field} expects {expected}, got {got}")]
    InvalidValue {
        field: &'static str,
        expected: &'static str,
        got: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(FieldValue::Text(String::new()).kind(), "text");
        assert_eq!(FieldValue::Int(3).kind(), "integer");
        assert_eq!(FieldValue::Price(Price::ZERO).kind(), "price");
        assert_eq!(FieldValue::Null.kind(), "null");
    }

    #[test]
    fn test_assign_error_display() {
        let error = AssignError::UnknownField {
            field: "Bogus".to_string(),
        };
        assert_eq!(error.to_string(), "no field named \"Bogus\" on the target record");

        let error = AssignError::InvalidValue {
            field: "StockLevel",
            expected: "an integer",
            got: "text",
        };
        assert_eq!(error.to_string(), "StockLevel expects an integer, got text");
    }
}
