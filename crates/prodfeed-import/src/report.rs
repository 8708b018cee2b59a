//! The four-stream outcome report for one import run.

use serde::Serialize;

/// Messages accumulated while an import runs.
///
/// Each stream is append-only and keeps row order, so the report reads in
/// the order rows were processed. Summary lines are appended once, at the
/// end of the run.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Report {
    successes: Vec<String>,
    remarks: Vec<String>,
    errors: Vec<String>,
    summary: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_success(&mut self, message: impl Into<String>) {
        self.successes.push(message.into());
    }

    pub fn add_remark(&mut self, message: impl Into<String>) {
        self.remarks.push(message.into());
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn add_summary(&mut self, message: impl Into<String>) {
        self.summary.push(message.into());
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn remarks(&self) -> &[String] {
        &self.remarks
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn summary(&self) -> &[String] {
        &self.summary
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
