//! CSV ingestion for the product feed importer.
//!
//! Adapts files on disk to the engine's row-source contract.

pub mod error;
pub mod reader;

pub use error::{IngestError, Result};
pub use reader::CsvRowReader;
