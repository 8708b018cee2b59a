//! Persistence for accepted product records.

pub mod jsonl;

pub use jsonl::{JsonlStore, StoreError, StoredProduct};
