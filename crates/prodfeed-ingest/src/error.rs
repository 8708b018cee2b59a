//! Error types for product feed ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a feed file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File access ===
    /// The feed file does not exist.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The feed file exists but could not be opened.
    #[error("failed to open CSV file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Row reading ===
    /// A row could not be read or decoded mid-stream.
    #[error("failed to read row from {path}: {source}")]
    Row {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = IngestError::FileNotFound {
            path: PathBuf::from("/data/feed.csv"),
        };
        assert_eq!(error.to_string(), "CSV file not found: /data/feed.csv");
    }
}
