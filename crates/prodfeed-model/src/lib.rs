//! Shared data model for the product feed importer.
//!
//! Holds the target-record contract ([`TargetRecord`]), the typed field
//! values that flow through translation ([`FieldValue`]), fixed-point money
//! ([`Price`]), and the concrete [`ProductRecord`] the CSV feeds build.

pub mod field;
pub mod money;
pub mod product;
pub mod target;

pub use field::{AssignError, FieldValue};
pub use money::{ParsePriceError, Price};
pub use product::ProductRecord;
pub use target::{FieldConstraint, TargetRecord, Violation};
