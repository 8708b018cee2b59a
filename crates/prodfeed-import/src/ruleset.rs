//! The per-source rule set the engine is parameterized over.

use prodfeed_model::TargetRecord;

use crate::mapping::FieldMapping;
use crate::record::Record;
use crate::report::Report;

/// Everything source-specific about one feed: its column mapping, its
/// translations, and its ignore rules.
///
/// The engine drives these hooks in a fixed order per row: map, translate,
/// ignore check, entity build. Hooks append their own remarks and errors to
/// the run's [`Report`].
pub trait RuleSet {
    /// The record type rows of this feed build into.
    type Target: TargetRecord;

    /// The column-position-to-field mapping for this feed.
    fn mapping(&self) -> &FieldMapping;

    /// Number of leading rows to skip before mapping starts (header rows).
    fn start_row(&self) -> usize {
        0
    }

    /// Rewrite raw text values into typed values, in place.
    fn translate(&self, record: &mut Record, row_index: usize, report: &mut Report);

    /// Whether this record should be dropped without being imported.
    ///
    /// Implementations append one error line per ignored row.
    fn should_ignore(&self, record: &Record, row_index: usize, report: &mut Report) -> bool;
}
