//! The row-by-row import engine.
//!
//! One run walks a row source once, start to finish:
//!
//! 1. Skip the configured number of header rows.
//! 2. Map each row by position; rows with the wrong column count are
//!    reported and skipped.
//! 3. Translate raw values into typed ones via the rule set.
//! 4. Drop rows the rule set's ignore rules match.
//! 5. Build and validate the target record.
//! 6. Persist the record, unless the run is in test mode.
//!
//! Per-row failures are report entries; the engine only returns an error
//! for faults that invalidate the whole run (a broken mapping or an
//! unreadable source).

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info};

use prodfeed_model::{AssignError, TargetRecord, Violation};

use crate::mapper::map_row;
use crate::record::Record;
use crate::report::Report;
use crate::ruleset::RuleSet;

/// A row-at-a-time source of raw string rows.
///
/// `next_row` returns `Ok(None)` once the source is exhausted. Errors are
/// fatal to the run; a source that can recover should do so internally.
pub trait RowSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn next_row(&mut self) -> std::result::Result<Option<Vec<String>>, Self::Error>;
}

/// Validates a built record against its constraints.
pub trait Validate<R> {
    /// All broken constraints, or an empty list for a valid record.
    fn validate(&self, record: &R) -> Vec<Violation>;
}

/// Writes accepted records to a backing store.
pub trait Persist<R> {
    type Error: std::error::Error + Send + Sync + 'static;

    fn persist(&mut self, record: R) -> std::result::Result<(), Self::Error>;
}

/// Errors that abort an import run.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The rule set's mapping covers no columns.
    #[error("rule set field mapping is empty")]
    EmptyMapping,

    /// The mapping names a field the target record does not have.
    #[error("mapped field {field:?} has no counterpart on the target record")]
    UnmappedField { field: String },

    /// The row source failed mid-run.
    #[error("failed to read source row: {0}")]
    Source(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, ImportError>;

#[derive(Debug, Default, Clone, Copy)]
struct RunCounters {
    total_rows: usize,
    not_mappable: usize,
    rules_ignored: usize,
    imported: usize,
}

/// Drives one import run over a rule set, validator, and store.
pub struct ImportEngine<'a, R, V, P> {
    rules: &'a R,
    validator: &'a V,
    store: &'a mut P,
    test_mode: bool,
}

impl<'a, R, V, P> ImportEngine<'a, R, V, P>
where
    R: RuleSet,
    V: Validate<R::Target>,
    P: Persist<R::Target>,
{
    pub fn new(rules: &'a R, validator: &'a V, store: &'a mut P) -> Self {
        Self {
            rules,
            validator,
            store,
            test_mode: false,
        }
    }

    /// Run every step except persistence.
    #[must_use]
    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    /// Consume the source and produce the run's report.
    ///
    /// The mapping is checked against the target record's declared fields
    /// before any row is read, so configuration faults surface immediately
    /// instead of on the first data row.
    pub fn run<S: RowSource>(mut self, mut source: S) -> Result<Report> {
        let mapping = self.rules.mapping();
        if mapping.is_empty() {
            return Err(ImportError::EmptyMapping);
        }
        for field in mapping.target_fields() {
            if !R::Target::has_field(field) {
                return Err(ImportError::UnmappedField {
                    field: field.to_string(),
                });
            }
        }

        let start_row = self.rules.start_row();
        let started = Instant::now();
        let mut report = Report::new();
        let mut counters = RunCounters::default();

        loop {
            let row = match source.next_row() {
                Ok(Some(row)) => row,
                Ok(None) => break,
                Err(error) => return Err(ImportError::Source(Box::new(error))),
            };
            let row_index = counters.total_rows;
            counters.total_rows += 1;
            if row_index < start_row {
                continue;
            }
            self.process_row(&row, row_index, &mut counters, &mut report)?;
        }

        let data_rows = counters.total_rows.saturating_sub(start_row);
        let not_imported = data_rows.saturating_sub(counters.imported);
        report.add_summary(format!(
            "{} Row(s) were successfully imported. {} Row(s) were not imported.",
            counters.imported, not_imported
        ));
        report.add_summary(format!(
            "{} Row(s) could not be imported because of mismatched column counts in the CSV.",
            counters.not_mappable
        ));
        report.add_summary(format!(
            "{} Row(s) could not be imported as they matched Ignore Rules.",
            counters.rules_ignored
        ));
        if self.test_mode {
            report.add_summary("Import ran in test mode. No records were persisted.");
        }

        info!(
            total_rows = counters.total_rows,
            imported = counters.imported,
            not_mappable = counters.not_mappable,
            rules_ignored = counters.rules_ignored,
            test_mode = self.test_mode,
            duration_ms = started.elapsed().as_millis(),
            "import run complete"
        );
        Ok(report)
    }

    fn process_row(
        &mut self,
        row: &[String],
        row_index: usize,
        counters: &mut RunCounters,
        report: &mut Report,
    ) -> Result<()> {
        let Some(mut record) = map_row(self.rules.mapping(), row) else {
            counters.not_mappable += 1;
            report.add_error(format!(
                "Row {row_index}: CSV Error - Column count mismatch. Row not imported."
            ));
            debug!(row_index, columns = row.len(), "column count mismatch");
            return Ok(());
        };

        self.rules.translate(&mut record, row_index, report);

        if self.rules.should_ignore(&record, row_index, report) {
            counters.rules_ignored += 1;
            debug!(row_index, "row matched an ignore rule");
            return Ok(());
        }

        let target = match build_target::<R::Target>(&record) {
            Ok(target) => target,
            Err(AssignError::UnknownField { field }) => {
                // The record carries a field the target does not know, so
                // the configuration is wrong for every row, not just this one.
                return Err(ImportError::UnmappedField { field });
            }
            Err(AssignError::InvalidValue {
                field,
                expected,
                got,
            }) => {
                report.add_error(format!(
                    "Row {row_index}: Entity Validation error - {field} - expects {expected}, got {got}"
                ));
                debug!(row_index, field, "value rejected at entity build");
                return Ok(());
            }
        };

        let violations = self.validator.validate(&target);
        if !violations.is_empty() {
            let detail: Vec<String> = violations.iter().map(ToString::to_string).collect();
            report.add_error(format!(
                "Row {row_index}: Entity Validation error - {}",
                detail.join("; ")
            ));
            debug!(row_index, violations = violations.len(), "validation failed");
            return Ok(());
        }

        if !self.test_mode
            && let Err(error) = self.store.persist(target)
        {
            report.add_error(format!(
                "Row {row_index}: Persistence error - {error}. Row not imported."
            ));
            debug!(row_index, "persistence rejected the record");
            return Ok(());
        }

        counters.imported += 1;
        report.add_success(format!("Row {row_index}: Successfully imported."));
        Ok(())
    }
}

fn build_target<T: TargetRecord>(record: &Record) -> std::result::Result<T, AssignError> {
    let mut target = T::default();
    for (field, value) in record.iter() {
        target.assign(field, value.clone())?;
    }
    Ok(target)
}
