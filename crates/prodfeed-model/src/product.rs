//! The product record built from supplier feed rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::{AssignError, FieldValue};
use crate::money::Price;
use crate::target::{FieldConstraint, TargetRecord};

/// A product as it is persisted to the store.
///
/// Length and sign constraints live in [`ProductRecord::CONSTRAINTS`];
/// assignment only checks that values carry the right type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_code: String,
    pub product_name: String,
    pub product_description: String,
    pub stock_level: i64,
    pub price_gbp: Price,
    pub discontinued: Option<DateTime<Utc>>,
    pub added: Option<DateTime<Utc>>,
}

impl ProductRecord {
    pub const CODE: &'static str = "ProductCode";
    pub const NAME: &'static str = "ProductName";
    pub const DESCRIPTION: &'static str = "ProductDescription";
    pub const STOCK_LEVEL: &'static str = "StockLevel";
    pub const PRICE_GBP: &'static str = "PriceGBP";
    pub const DISCONTINUED: &'static str = "Discontinued";
    pub const ADDED: &'static str = "Added";

    pub const CONSTRAINTS: &'static [FieldConstraint] = &[
        FieldConstraint::new(Self::CODE).required().max_length(10),
        FieldConstraint::new(Self::NAME).required().max_length(50),
        FieldConstraint::new(Self::DESCRIPTION).required().max_length(255),
        FieldConstraint::new(Self::STOCK_LEVEL).non_negative(),
        FieldConstraint::new(Self::PRICE_GBP).non_negative(),
        FieldConstraint::new(Self::DISCONTINUED),
        FieldConstraint::new(Self::ADDED),
    ];
}

impl TargetRecord for ProductRecord {
    fn fields() -> &'static [FieldConstraint] {
        Self::CONSTRAINTS
    }

    fn assign(&mut self, field: &str, value: FieldValue) -> Result<(), AssignError> {
        match field {
            Self::CODE => self.product_code = expect_text(Self::CODE, value)?,
            Self::NAME => self.product_name = expect_text(Self::NAME, value)?,
            Self::DESCRIPTION => {
                self.product_description = expect_text(Self::DESCRIPTION, value)?;
            }
            Self::STOCK_LEVEL => self.stock_level = expect_int(Self::STOCK_LEVEL, value)?,
            Self::PRICE_GBP => self.price_gbp = expect_price(Self::PRICE_GBP, value)?,
            Self::DISCONTINUED => {
                self.discontinued = expect_timestamp(Self::DISCONTINUED, value)?;
            }
            Self::ADDED => self.added = expect_timestamp(Self::ADDED, value)?,
            other => {
                return Err(AssignError::UnknownField {
                    field: other.to_string(),
                });
            }
        }
        Ok(())
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            Self::CODE => FieldValue::Text(self.product_code.clone()),
            Self::NAME => FieldValue::Text(self.product_name.clone()),
            Self::DESCRIPTION => FieldValue::Text(self.product_description.clone()),
            Self::STOCK_LEVEL => FieldValue::Int(self.stock_level),
            Self::PRICE_GBP => FieldValue::Price(self.price_gbp),
            Self::DISCONTINUED => self
                .discontinued
                .map_or(FieldValue::Null, FieldValue::Timestamp),
            Self::ADDED => self.added.map_or(FieldValue::Null, FieldValue::Timestamp),
            _ => return None,
        };
        Some(value)
    }
}

fn expect_text(field: &'static str, value: FieldValue) -> Result<String, AssignError> {
    match value {
        FieldValue::Text(text) => Ok(text),
        other => Err(AssignError::InvalidValue {
            field,
            expected: "text",
            got: other.kind(),
        }),
    }
}

fn expect_int(field: &'static str, value: FieldValue) -> Result<i64, AssignError> {
    match value {
        FieldValue::Int(int) => Ok(int),
        other => Err(AssignError::InvalidValue {
            field,
            expected: "an integer",
            got: other.kind(),
        }),
    }
}

fn expect_price(field: &'static str, value: FieldValue) -> Result<Price, AssignError> {
    match value {
        FieldValue::Price(price) => Ok(price),
        other => Err(AssignError::InvalidValue {
            field,
            expected: "a price",
            got: other.kind(),
        }),
    }
}

fn expect_timestamp(
    field: &'static str,
    value: FieldValue,
) -> Result<Option<DateTime<Utc>>, AssignError> {
    match value {
        FieldValue::Timestamp(timestamp) => Ok(Some(timestamp)),
        FieldValue::Null => Ok(None),
        other => Err(AssignError::InvalidValue {
            field,
            expected: "a timestamp or null",
            got: other.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_builds_full_record() {
        let mut record = ProductRecord::default();
        record
            .assign(ProductRecord::CODE, FieldValue::Text("P0001".to_string()))
            .unwrap();
        record
            .assign(ProductRecord::NAME, FieldValue::Text("TV".to_string()))
            .unwrap();
        record
            .assign(
                ProductRecord::DESCRIPTION,
                FieldValue::Text("32in TV".to_string()),
            )
            .unwrap();
        record
            .assign(ProductRecord::STOCK_LEVEL, FieldValue::Int(20))
            .unwrap();
        record
            .assign(
                ProductRecord::PRICE_GBP,
                FieldValue::Price(Price::from_minor_units(5_000)),
            )
            .unwrap();
        record
            .assign(ProductRecord::DISCONTINUED, FieldValue::Null)
            .unwrap();
        let now = Utc::now();
        record
            .assign(ProductRecord::ADDED, FieldValue::Timestamp(now))
            .unwrap();

        assert_eq!(record.product_code, "P0001");
        assert_eq!(record.product_name, "TV");
        assert_eq!(record.stock_level, 20);
        assert_eq!(record.price_gbp.minor_units(), 5_000);
        assert_eq!(record.discontinued, None);
        assert_eq!(record.added, Some(now));
    }

    #[test]
    fn test_assign_rejects_unknown_field() {
        let mut record = ProductRecord::default();
        let error = record
            .assign("Bogus", FieldValue::Text("x".to_string()))
            .unwrap_err();
        assert_eq!(
            error,
            AssignError::UnknownField {
                field: "Bogus".to_string()
            }
        );
    }

    #[test]
    fn test_assign_rejects_wrong_type() {
        let mut record = ProductRecord::default();
        let error = record
            .assign(
                ProductRecord::STOCK_LEVEL,
                FieldValue::Text("abc".to_string()),
            )
            .unwrap_err();
        assert_eq!(
            error,
            AssignError::InvalidValue {
                field: ProductRecord::STOCK_LEVEL,
                expected: "an integer",
                got: "text",
            }
        );
    }

    #[test]
    fn test_field_value_reads_back_assigned_values() {
        let mut record = ProductRecord::default();
        record
            .assign(ProductRecord::CODE, FieldValue::Text("P0002".to_string()))
            .unwrap();
        record
            .assign(ProductRecord::STOCK_LEVEL, FieldValue::Int(7))
            .unwrap();

        assert_eq!(
            record.field_value(ProductRecord::CODE),
            Some(FieldValue::Text("P0002".to_string()))
        );
        assert_eq!(
            record.field_value(ProductRecord::STOCK_LEVEL),
            Some(FieldValue::Int(7))
        );
        assert_eq!(
            record.field_value(ProductRecord::DISCONTINUED),
            Some(FieldValue::Null)
        );
        assert_eq!(record.field_value("Bogus"), None);
    }

    #[test]
    fn test_constraint_table_matches_assignable_fields() {
        let mut record = ProductRecord::default();
        for constraint in ProductRecord::fields() {
            assert!(ProductRecord::has_field(constraint.field));
            let value = record
                .field_value(constraint.field)
                .unwrap_or_else(|| panic!("no accessor for {}", constraint.field));
            assert!(record.assign(constraint.field, value).is_ok());
        }
    }
}
