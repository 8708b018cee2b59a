//! Position-to-field mapping for a delimited source.

use std::collections::BTreeSet;

use thiserror::Error;

/// Errors from building a [`FieldMapping`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// A mapping must cover at least one column.
    #[error("field mapping is empty")]
    Empty,

    /// Two columns mapped onto the same target field.
    #[error("field {0:?} is mapped more than once")]
    DuplicateField(String),
}

/// Maps 0-based column positions onto target record fields.
///
/// The mapping is dense: position `i` maps to `fields[i]`, and a source row
/// is mappable only when its column count equals [`FieldMapping::len`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    fields: Vec<String>,
}

impl FieldMapping {
    /// Build a mapping from field names in position order.
    pub fn new<I, S>(fields: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err(MappingError::Empty);
        }
        let mut seen = BTreeSet::new();
        for field in &fields {
            if !seen.insert(field.as_str()) {
                return Err(MappingError::DuplicateField(field.clone()));
            }
        }
        Ok(Self { fields })
    }

    /// Number of columns the mapping covers.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate `(position, target field)` pairs in position order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.fields
            .iter()
            .enumerate()
            .map(|(position, field)| (position, field.as_str()))
    }

    /// Iterate the target field names in position order.
    pub fn target_fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }
}
