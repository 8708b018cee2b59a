//! The target-record contract: declared fields, constraints, and assignment.

use std::fmt;

use serde::Serialize;

use crate::field::{AssignError, FieldValue};

/// A declared field on a target record, with its validation constraints.
///
/// The constraint table doubles as the record's field list: mapping targets
/// are checked against it before an import runs, and the validator walks it
/// afterwards.
#[derive(Debug, Clone, Copy)]
pub struct FieldConstraint {
    pub field: &'static str,
    pub required: bool,
    pub max_length: Option<usize>,
    pub non_negative: bool,
}

impl FieldConstraint {
    pub const fn new(field: &'static str) -> Self {
        Self {
            field,
            required: false,
            max_length: None,
            non_negative: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn non_negative(mut self) -> Self {
        self.non_negative = true;
        self
    }
}

/// One broken constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.field, self.message)
    }
}

/// A record type rows can be imported into.
///
/// Implementors declare their fields statically and accept translated values
/// one at a time, so the import engine stays independent of any concrete
/// record shape.
pub trait TargetRecord: Default {
    /// The declared field and constraint table.
    fn fields() -> &'static [FieldConstraint];

    /// Assign one translated value to the named field.
    fn assign(&mut self, field: &str, value: FieldValue) -> Result<(), AssignError>;

    /// Read a field back as a [`FieldValue`], or `None` for unknown names.
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    fn has_field(field: &str) -> bool {
        Self::fields().iter().any(|constraint| constraint.field == field)
    }
}
