//! Roster CSV ingestion.
//!
//! Decodes an uploaded roster file into an in-memory table: a header row
//! plus data rows. The file is fully materialized before the engine runs;
//! no streaming. The delimiter is auto-detected as tab when the content
//! contains a tab and no comma, otherwise comma.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV could not be parsed: {0}")]
    Parse(#[from] csv::Error),
    #[error("CSV file is empty")]
    EmptyFile,
    #[error("CSV has no rows")]
    NoDataRows,
    #[error("CSV declares column '{0}' more than once")]
    DuplicateHeader(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;

/// A decoded roster: raw upload headers and data rows. Every row is padded
/// or truncated to the header count, so cell lookup by header index is
/// always in bounds.
#[derive(Debug, Clone)]
pub struct RosterTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RosterTable {
    /// Position of a raw header, by exact (already-normalized-whitespace) name.
    pub fn header_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|name| name == header)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Tab wins only when the content has tabs and no commas; mixed content is
/// treated as comma-separated.
pub fn detect_delimiter(text: &str) -> u8 {
    if text.contains('\t') && !text.contains(',') {
        b'\t'
    } else {
        b','
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Decodes roster bytes into a [`RosterTable`].
///
/// The first non-empty record is the header row; fully empty records are
/// skipped. Duplicate raw headers and files without data rows are rejected.
pub fn parse_roster(bytes: &[u8]) -> Result<RosterTable> {
    let text = String::from_utf8_lossy(bytes);
    let delimiter = detect_delimiter(&text);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }

    let Some(header_row) = raw_rows.first() else {
        return Err(IngestError::EmptyFile);
    };
    let headers: Vec<String> = header_row.iter().map(|value| normalize_header(value)).collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyFile);
    }

    let mut seen = std::collections::BTreeSet::new();
    for header in &headers {
        if !header.is_empty() && !seen.insert(header.as_str()) {
            return Err(IngestError::DuplicateHeader(header.clone()));
        }
    }

    let mut rows = Vec::with_capacity(raw_rows.len().saturating_sub(1));
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).cloned().unwrap_or_default());
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(IngestError::NoDataRows);
    }

    debug!(
        column_count = headers.len(),
        row_count = rows.len(),
        delimiter = if delimiter == b'\t' { "tab" } else { "comma" },
        "roster decoded"
    );
    Ok(RosterTable { headers, rows })
}

/// Reads and decodes a roster file from disk.
pub fn read_roster(path: &Path) -> Result<RosterTable> {
    let bytes = fs::read(path)?;
    parse_roster(&bytes)
}
