//! Core import pipeline for delimited product feeds.
//!
//! The engine walks a [`RowSource`] once, applying a [`RuleSet`]'s mapping,
//! translations, and ignore rules to each row, then building, validating,
//! and persisting the target record. Outcomes land in a [`Report`] with
//! four ordered streams: successes, remarks, errors, and summary.

pub mod engine;
pub mod mapper;
pub mod mapping;
pub mod product;
pub mod record;
pub mod report;
pub mod ruleset;

pub use engine::{ImportEngine, ImportError, Persist, RowSource, Validate};
pub use mapper::map_row;
pub use mapping::{FieldMapping, MappingError};
pub use product::{ProductFeedRules, sanitize_price};
pub use record::Record;
pub use report::Report;
pub use ruleset::RuleSet;
