use std::path::PathBuf;

use roster_map::ColumnMapping;
use roster_model::{FieldDefaults, Template};

/// Result of an import run, passed to the summary printer.
pub struct ImportResult {
    pub template: Template,
    pub defaults: FieldDefaults,
    pub mapping: ColumnMapping,
    pub row_count: usize,
    pub defaulted_columns: usize,
    /// Where the output was written, or `None` for a dry run.
    pub output_path: Option<PathBuf>,
}
