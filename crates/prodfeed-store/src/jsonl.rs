//! Append-only JSON-lines product store.

use std::collections::BTreeSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use prodfeed_import::Persist;
use prodfeed_model::ProductRecord;

/// Errors from reading or writing the product store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write store {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt store line {line} in {path}: {source}")]
    Corrupt {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode product record: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    /// Product codes are unique across the store.
    #[error("duplicate product code {code:?}")]
    DuplicateCode { code: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// One persisted row: a generated id plus the record fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredProduct {
    pub id: u64,
    #[serde(flatten)]
    pub record: ProductRecord,
}

/// Appends one JSON object per accepted record to a file.
///
/// Opening scans existing content for known product codes and the highest
/// id, so ids keep counting across runs. The file itself is only created
/// on the first write; a run that persists nothing leaves no file behind.
#[derive(Debug)]
pub struct JsonlStore {
    path: PathBuf,
    file: Option<File>,
    codes: BTreeSet<String>,
    next_id: u64,
}

impl JsonlStore {
    pub fn open(path: &Path) -> Result<Self> {
        let mut codes = BTreeSet::new();
        let mut next_id = 1;
        match File::open(path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                for (number, line) in reader.lines().enumerate() {
                    let line = line.map_err(|source| StoreError::Read {
                        path: path.to_path_buf(),
                        source,
                    })?;
                    if line.trim().is_empty() {
                        continue;
                    }
                    let stored: StoredProduct =
                        serde_json::from_str(&line).map_err(|source| StoreError::Corrupt {
                            path: path.to_path_buf(),
                            line: number + 1,
                            source,
                        })?;
                    codes.insert(stored.record.product_code);
                    next_id = next_id.max(stored.id + 1);
                }
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
        debug!(path = %path.display(), known_codes = codes.len(), "opened product store");
        Ok(Self {
            path: path.to_path_buf(),
            file: None,
            codes,
            next_id,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of product codes known to the store.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Read every stored product back, in file order.
    pub fn load_all(&self) -> Result<Vec<StoredProduct>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let reader = BufReader::new(file);
        let mut products = Vec::new();
        for (number, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let stored = serde_json::from_str(&line).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                line: number + 1,
                source,
            })?;
            products.push(stored);
        }
        Ok(products)
    }
}

impl Persist<ProductRecord> for JsonlStore {
    type Error = StoreError;

    fn persist(&mut self, record: ProductRecord) -> Result<()> {
        if self.codes.contains(&record.product_code) {
            return Err(StoreError::DuplicateCode {
                code: record.product_code,
            });
        }

        if self.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            self.file = Some(file);
        }

        let stored = StoredProduct {
            id: self.next_id,
            record,
        };
        let mut line = serde_json::to_string(&stored)
            .map_err(|source| StoreError::Encode { source })?;
        line.push('\n');

        if let Some(file) = self.file.as_mut() {
            file.write_all(line.as_bytes())
                .map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })?;
        }

        debug!(id = stored.id, code = %stored.record.product_code, "persisted product");
        self.codes.insert(stored.record.product_code);
        self.next_id += 1;
        Ok(())
    }
}
