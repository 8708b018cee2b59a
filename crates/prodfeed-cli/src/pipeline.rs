//! Import pipeline orchestration: open the feed and the store, drive the
//! engine, and hand back the run's report.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use prodfeed_import::{ImportEngine, ProductFeedRules, Report};
use prodfeed_ingest::CsvRowReader;
use prodfeed_store::JsonlStore;
use prodfeed_validate::ConstraintValidator;

/// One import run's inputs, decoupled from argument parsing.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// CSV feed to import.
    pub file: PathBuf,
    /// Store file accepted records are appended to.
    pub store: PathBuf,
    /// Run every step except persistence.
    pub test_mode: bool,
}

/// Run one import over `options.file` and return the report.
///
/// Per-row failures are inside the report; an `Err` here means the run
/// itself could not happen (missing feed, unreadable store, broken
/// configuration).
pub fn run_import(options: &ImportOptions) -> Result<Report> {
    let span = info_span!(
        "import",
        file = %options.file.display(),
        test_mode = options.test_mode
    );
    let _guard = span.enter();
    let started = Instant::now();

    let rules = ProductFeedRules::new().context("configure product feed rules")?;
    let validator = ConstraintValidator::new();
    let mut store = JsonlStore::open(&options.store)
        .with_context(|| format!("open product store {}", options.store.display()))?;
    let reader = CsvRowReader::open(&options.file)
        .with_context(|| format!("open feed {}", options.file.display()))?;

    let report = ImportEngine::new(&rules, &validator, &mut store)
        .with_test_mode(options.test_mode)
        .run(reader)
        .context("import feed")?;

    info!(
        successes = report.successes().len(),
        remarks = report.remarks().len(),
        errors = report.errors().len(),
        duration_ms = started.elapsed().as_millis(),
        "import finished"
    );
    Ok(report)
}
