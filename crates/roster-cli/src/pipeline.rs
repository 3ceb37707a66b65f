//! Import pipeline with explicit stages.
//!
//! One import runs the stages in order:
//! 1. **Match**: map template columns to upload headers
//! 2. **Pre-flight**: check declared requirements against match/default coverage
//! 3. **Transform**: build template-ordered output rows
//! 4. **Row validation**: check every required value is present per row
//! 5. **Serialize**: render the output CSV bytes
//!
//! Any failing stage is terminal for the attempt; nothing is partially
//! committed and retry means re-submitting corrected input. The whole pass
//! is pure and in-memory: reading the roster file and writing the output
//! are the caller's concern.

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, info_span};

use roster_ingest::{IngestError, RosterTable};
use roster_map::{ColumnMapping, MatchError, match_columns};
use roster_model::{FieldDefaults, Template};
use roster_output::{OutputError, serialize_csv};
use roster_transform::transform_rows;
use roster_validate::{ValidationError, check_declared_requirements, check_row_completeness};

/// Any terminal import failure, surfaced verbatim to the caller.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Result of a successful import.
#[derive(Debug)]
pub struct ImportOutcome {
    /// Serialized output CSV, ready to persist or attach.
    pub csv: Vec<u8>,
    /// Data rows emitted (always equals the roster's row count).
    pub row_count: usize,
    /// The column mapping that drove the transformation.
    pub mapping: ColumnMapping,
    /// Template columns filled from defaults rather than the roster.
    pub defaulted_columns: usize,
}

/// Decodes roster bytes and runs one import end to end.
pub fn run_import_bytes(
    template: &Template,
    bytes: &[u8],
    defaults: &FieldDefaults,
) -> Result<ImportOutcome, ImportError> {
    let table = roster_ingest::parse_roster(bytes)?;
    run_import(template, &table, defaults)
}

/// Runs one import end to end over an already-decoded roster.
pub fn run_import(
    template: &Template,
    table: &RosterTable,
    defaults: &FieldDefaults,
) -> Result<ImportOutcome, ImportError> {
    let import_span = info_span!(
        "import",
        template_id = template.id,
        template_name = %template.name
    );
    let _import_guard = import_span.enter();
    let import_start = Instant::now();

    let mapping = info_span!("match").in_scope(|| {
        let start = Instant::now();
        let mapping = match_columns(template, &table.headers)?;
        debug!(
            matched = mapping.matched_count(),
            unmatched = mapping.unmatched_count(),
            snapshot = %serde_json::to_string(&mapping).unwrap_or_default(),
            duration_ms = start.elapsed().as_millis(),
            "headers matched"
        );
        Ok::<_, MatchError>(mapping)
    })?;

    check_declared_requirements(template, &mapping, defaults)?;
    debug!("pre-flight passed");

    let rows = info_span!("transform").in_scope(|| {
        let start = Instant::now();
        let rows = transform_rows(table, &mapping, defaults, template);
        debug!(
            row_count = rows.len(),
            duration_ms = start.elapsed().as_millis(),
            "rows transformed"
        );
        rows
    });

    check_row_completeness(template, &rows)?;

    let csv = serialize_csv(template, &rows)?;
    let defaulted_columns = template
        .columns
        .iter()
        .filter(|column| !mapping.is_matched(column) && defaults.has_non_empty(column))
        .count();

    info!(
        template_id = template.id,
        row_count = rows.len(),
        column_count = template.column_count(),
        output_bytes = csv.len(),
        duration_ms = import_start.elapsed().as_millis(),
        "import complete"
    );

    Ok(ImportOutcome {
        csv,
        row_count: rows.len(),
        mapping,
        defaulted_columns,
    })
}
