//! Validation of built records against their declared constraints.

use prodfeed_import::Validate;
use prodfeed_model::{FieldConstraint, FieldValue, TargetRecord, Violation};

/// Checks a record against the constraint table its type declares.
///
/// Violations come back in field-table order, one per broken constraint.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstraintValidator;

impl ConstraintValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn check<R: TargetRecord>(&self, record: &R) -> Vec<Violation> {
        let mut violations = Vec::new();
        for constraint in R::fields() {
            if let Some(value) = record.field_value(constraint.field) {
                check_field(constraint, &value, &mut violations);
            }
        }
        violations
    }
}

impl<R: TargetRecord> Validate<R> for ConstraintValidator {
    fn validate(&self, record: &R) -> Vec<Violation> {
        self.check(record)
    }
}

fn check_field(constraint: &FieldConstraint, value: &FieldValue, violations: &mut Vec<Violation>) {
    match value {
        FieldValue::Text(text) => {
            if constraint.required && text.trim().is_empty() {
                violations.push(Violation::new(constraint.field, "must not be blank"));
            }
            if let Some(max) = constraint.max_length
                && text.chars().count() > max
            {
                violations.push(Violation::new(
                    constraint.field,
                    format!("must be at most {max} characters"),
                ));
            }
        }
        FieldValue::Int(int) => {
            if constraint.non_negative && *int < 0 {
                violations.push(Violation::new(constraint.field, "must be zero or positive"));
            }
        }
        FieldValue::Price(price) => {
            if constraint.non_negative && price.is_negative() {
                violations.push(Violation::new(constraint.field, "must be zero or positive"));
            }
        }
        FieldValue::Timestamp(_) => {}
        FieldValue::Null => {
            if constraint.required {
                violations.push(Violation::new(constraint.field, "must not be blank"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use prodfeed_model::ProductRecord;

    use super::*;

    fn valid_product() -> ProductRecord {
        ProductRecord {
            product_code: "P0001".to_string(),
            product_name: "TV".to_string(),
            product_description: "32in TV".to_string(),
            stock_level: 20,
            price_gbp: "50.00".parse().unwrap(),
            discontinued: None,
            added: Some(chrono::Utc::now()),
        }
    }

    #[test]
    fn test_valid_record_has_no_violations() {
        let validator = ConstraintValidator::new();
        assert!(validator.check(&valid_product()).is_empty());
    }

    #[test]
    fn test_blank_required_fields_are_reported() {
        let record = ProductRecord {
            product_code: String::new(),
            product_name: "  ".to_string(),
            ..valid_product()
        };
        let violations = ConstraintValidator::new().check(&record);

        assert_eq!(
            violations,
            [
                Violation::new("ProductCode", "must not be blank"),
                Violation::new("ProductName", "must not be blank"),
            ]
        );
    }

    #[test]
    fn test_overlong_fields_are_reported() {
        let record = ProductRecord {
            product_code: "P".repeat(11),
            product_name: "N".repeat(51),
            ..valid_product()
        };
        let violations = ConstraintValidator::new().check(&record);

        assert_eq!(
            violations,
            [
                Violation::new("ProductCode", "must be at most 10 characters"),
                Violation::new("ProductName", "must be at most 50 characters"),
            ]
        );
    }

    #[test]
    fn test_length_limit_counts_characters_not_bytes() {
        let record = ProductRecord {
            product_code: "é".repeat(10),
            ..valid_product()
        };
        assert!(ConstraintValidator::new().check(&record).is_empty());
    }

    #[test]
    fn test_negative_stock_and_price_are_reported() {
        let record = ProductRecord {
            stock_level: -1,
            price_gbp: "-0.01".parse().unwrap(),
            ..valid_product()
        };
        let violations = ConstraintValidator::new().check(&record);

        assert_eq!(
            violations,
            [
                Violation::new("StockLevel", "must be zero or positive"),
                Violation::new("PriceGBP", "must be zero or positive"),
            ]
        );
    }

    #[test]
    fn test_optional_timestamps_may_be_null() {
        let record = ProductRecord {
            discontinued: None,
            added: None,
            ..valid_product()
        };
        assert!(ConstraintValidator::new().check(&record).is_empty());
    }
}
