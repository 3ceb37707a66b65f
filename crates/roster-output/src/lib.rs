//! Output CSV serialization.
//!
//! The header row is the template's columns in declaration order, with the
//! canonical email column rewritten to its required-marker output form
//! (`Email Address`). Data rows are written comma-separated, one per input
//! row, and returned in memory; the caller decides whether to persist,
//! email, or stream the bytes.

use thiserror::Error;

use roster_map::{RosterField, normalize_key};
use roster_model::Template;

/// Output spelling of the canonical email column.
pub const EMAIL_OUTPUT_HEADER: &str = "Email Address";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, OutputError>;

/// Header row for the output file: template columns in declared order with
/// the email column rewritten.
pub fn output_columns(template: &Template) -> Vec<String> {
    template
        .columns
        .iter()
        .map(|column| {
            if normalize_key(column) == RosterField::Email.canonical_key() {
                EMAIL_OUTPUT_HEADER.to_string()
            } else {
                column.clone()
            }
        })
        .collect()
}

/// Serializes the output header and rows to CSV bytes.
pub fn serialize_csv(template: &Template, rows: &[Vec<String>]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(output_columns(template))?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|err| OutputError::Csv(err.into_error().into()))
}
