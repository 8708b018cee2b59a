//! Row-at-a-time CSV reading for the import engine.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecordsIntoIter};
use tracing::debug;

use prodfeed_import::RowSource;

use crate::error::{IngestError, Result};

/// Streams raw rows out of a CSV file.
///
/// Every physical row is exposed, including the header; skipping header
/// rows is the engine's job. The reader is flexible about column counts so
/// ragged rows reach the engine's mappability check instead of failing the
/// parse.
pub struct CsvRowReader {
    path: PathBuf,
    records: StringRecordsIntoIter<File>,
}

impl std::fmt::Debug for CsvRowReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `StringRecordsIntoIter` is not `Debug`, so only the path is shown.
        f.debug_struct("CsvRowReader")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl CsvRowReader {
    pub fn open(path: &Path) -> Result<Self> {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|error| {
                if matches!(
                    error.kind(),
                    csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound
                ) {
                    IngestError::FileNotFound {
                        path: path.to_path_buf(),
                    }
                } else {
                    IngestError::Open {
                        path: path.to_path_buf(),
                        source: error,
                    }
                }
            })?;
        debug!(path = %path.display(), "opened CSV feed");
        Ok(Self {
            path: path.to_path_buf(),
            records: reader.into_records(),
        })
    }
}

impl RowSource for CsvRowReader {
    type Error = IngestError;

    fn next_row(&mut self) -> std::result::Result<Option<Vec<String>>, IngestError> {
        match self.records.next() {
            Some(Ok(record)) => Ok(Some(record.iter().map(str::to_string).collect())),
            Some(Err(source)) => Err(IngestError::Row {
                path: self.path.clone(),
                source,
            }),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn feed_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn read_all(reader: &mut CsvRowReader) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        while let Some(row) = reader.next_row().unwrap() {
            rows.push(row);
        }
        rows
    }

    #[test]
    fn test_reads_every_physical_row() {
        let file = feed_file("Code,Name\nP0001,TV\nP0002,Radio\n");
        let mut reader = CsvRowReader::open(file.path()).unwrap();

        let rows = read_all(&mut reader);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ["Code", "Name"]);
        assert_eq!(rows[2], ["P0002", "Radio"]);
    }

    #[test]
    fn test_ragged_rows_pass_through() {
        let file = feed_file("a,b,c\nonly,two\nfour,cells,in,row\n");
        let mut reader = CsvRowReader::open(file.path()).unwrap();

        let rows = read_all(&mut reader);
        assert_eq!(rows[1].len(), 2);
        assert_eq!(rows[2].len(), 4);
    }

    #[test]
    fn test_quoted_cells_keep_commas() {
        let file = feed_file("P0001,\"TV, 32 inch\",\"He said \"\"hi\"\"\"\n");
        let mut reader = CsvRowReader::open(file.path()).unwrap();

        let rows = read_all(&mut reader);
        assert_eq!(rows[0][1], "TV, 32 inch");
        assert_eq!(rows[0][2], "He said \"hi\"");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let file = feed_file("P0001,TV\n\nP0002,Radio\n");
        let mut reader = CsvRowReader::open(file.path()).unwrap();

        let rows = read_all(&mut reader);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], ["P0002", "Radio"]);
    }

    #[test]
    fn test_empty_file_yields_no_rows() {
        let file = feed_file("");
        let mut reader = CsvRowReader::open(file.path()).unwrap();
        assert!(reader.next_row().unwrap().is_none());
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let error = CsvRowReader::open(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(error, IngestError::FileNotFound { .. }));
    }
}
