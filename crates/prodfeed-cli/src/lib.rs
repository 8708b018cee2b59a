//! CLI library components for the product feed importer.

pub mod logging;
pub mod pipeline;
