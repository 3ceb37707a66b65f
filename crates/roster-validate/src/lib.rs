//! Completeness validation.
//!
//! Two phases with different failure semantics:
//! - pre-flight collects every required template column with neither a
//!   matched header nor a non-empty default into one aggregated error,
//!   before any row is produced;
//! - per-row checks every transformed row and stops at the first empty
//!   required value, since a failing later row indicates inconsistent
//!   upload data that invalidates the whole batch.
//!
//! Both rejections are terminal for the import attempt; retry is the
//! caller's responsibility.

use thiserror::Error;

use roster_map::{ColumnMapping, is_roster_field};
use roster_model::{FieldDefaults, Template};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Pre-flight failure: all unsatisfied required columns at once.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),
    /// Per-row failure: first offending row (1-based) and column.
    #[error("Row {row} is missing a required value for {column}.")]
    MissingRowValue { row: usize, column: String },
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Pre-flight check: every required template column must be covered by a
/// matched upload header or a non-empty default.
///
/// Canonical roster fields are skipped here; the matcher already guarantees
/// their headers exist, and their per-row values are checked after
/// transformation.
pub fn check_declared_requirements(
    template: &Template,
    mapping: &ColumnMapping,
    defaults: &FieldDefaults,
) -> Result<()> {
    let missing: Vec<String> = template
        .columns
        .iter()
        .filter(|column| template.is_required(column))
        .filter(|column| !is_roster_field(column))
        .filter(|column| !mapping.is_matched(column))
        .filter(|column| !defaults.has_non_empty(column))
        .cloned()
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingRequiredFields(missing))
    }
}

/// Per-row check over transformed output rows, in template column order.
///
/// A column counts as required when the template flags it or when it names
/// a canonical roster field, irrespective of where its values came from.
/// Fails fast on the first empty required value.
pub fn check_row_completeness(template: &Template, rows: &[Vec<String>]) -> Result<()> {
    let required: Vec<bool> = template
        .columns
        .iter()
        .map(|column| template.is_required(column) || is_roster_field(column))
        .collect();

    for (row_idx, row) in rows.iter().enumerate() {
        for ((column, is_required), value) in template.columns.iter().zip(&required).zip(row) {
            if *is_required && value.trim().is_empty() {
                return Err(ValidationError::MissingRowValue {
                    row: row_idx + 1,
                    column: column.clone(),
                });
            }
        }
    }
    Ok(())
}
