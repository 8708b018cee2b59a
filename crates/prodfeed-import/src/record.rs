//! The intermediate record between mapping and entity build.

use std::collections::BTreeMap;

use prodfeed_model::{FieldValue, Price};

/// Field values keyed by target field name.
///
/// Mapping fills a record with `Text` values; translation replaces some of
/// them with typed variants. Iteration order is the field name order, so
/// downstream behavior is deterministic.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Record {
    values: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: FieldValue) {
        self.values.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Raw text of a field, when it has not yet been replaced by a typed value.
    pub fn text(&self, field: &str) -> Option<&str> {
        match self.values.get(field) {
            Some(FieldValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn int(&self, field: &str) -> Option<i64> {
        match self.values.get(field) {
            Some(FieldValue::Int(int)) => Some(*int),
            _ => None,
        }
    }

    pub fn price(&self, field: &str) -> Option<Price> {
        match self.values.get(field) {
            Some(FieldValue::Price(price)) => Some(*price),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(field, value)| (field.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters_match_variant() {
        let mut record = Record::new();
        record.insert("Name", FieldValue::Text("TV".to_string()));
        record.insert("Stock", FieldValue::Int(20));
        record.insert("Price", FieldValue::Price(Price::from_minor_units(499)));

        assert_eq!(record.text("Name"), Some("TV"));
        assert_eq!(record.int("Stock"), Some(20));
        assert_eq!(record.price("Price"), Some(Price::from_minor_units(499)));

        // A typed value is no longer text, and vice versa.
        assert_eq!(record.text("Stock"), None);
        assert_eq!(record.int("Name"), None);
        assert_eq!(record.price("Missing"), None);
    }

    #[test]
    fn test_insert_replaces_existing_value() {
        let mut record = Record::new();
        record.insert("Stock", FieldValue::Text("0".to_string()));
        record.insert("Stock", FieldValue::Int(0));

        assert_eq!(record.len(), 1);
        assert_eq!(record.int("Stock"), Some(0));
    }
}
