//! Constraint validation for the product feed importer.

pub mod checker;

pub use checker::ConstraintValidator;
