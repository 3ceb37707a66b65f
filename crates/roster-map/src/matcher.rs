//! Template-to-roster column matching.
//!
//! For each template column, the first upload header sharing its canonical
//! key is recorded; columns with no such header are left unmatched and fall
//! back to field defaults downstream. The mapping is ephemeral: recomputed
//! per import, never persisted.

use serde::Serialize;

use roster_model::Template;

use crate::error::MatchError;
use crate::normalize::normalize_key;
use crate::roster::require_roster_fields;

/// One template column's match outcome.
#[derive(Debug, Clone, Serialize)]
pub struct MappedColumn {
    /// Template column, as declared (marker included).
    pub template_column: String,
    /// Matched upload header, or `None` when no header shares the key.
    pub header: Option<String>,
}

/// Mapping from template columns to upload headers, in template declaration
/// order.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnMapping {
    entries: Vec<MappedColumn>,
}

impl ColumnMapping {
    pub fn entries(&self) -> &[MappedColumn] {
        &self.entries
    }

    /// The upload header matched to a template column, if any.
    pub fn header_for(&self, template_column: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.template_column == template_column)
            .and_then(|entry| entry.header.as_deref())
    }

    pub fn is_matched(&self, template_column: &str) -> bool {
        self.header_for(template_column).is_some()
    }

    pub fn matched_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.header.is_some())
            .count()
    }

    pub fn unmatched_count(&self) -> usize {
        self.entries.len() - self.matched_count()
    }
}

/// Builds the column mapping for one import.
///
/// Deterministic and order-stable: template columns are visited in declared
/// order and for each the first header (in upload order) with an equal
/// canonical key wins. Fails when any canonical roster field (first name,
/// last name, email) cannot be located among the upload headers.
pub fn match_columns(template: &Template, headers: &[String]) -> Result<ColumnMapping, MatchError> {
    require_roster_fields(headers)?;

    let entries = template
        .columns
        .iter()
        .map(|column| {
            let key = normalize_key(column);
            let header = headers
                .iter()
                .find(|header| normalize_key(header) == key)
                .cloned();
            MappedColumn {
                template_column: column.clone(),
                header,
            }
        })
        .collect();

    Ok(ColumnMapping { entries })
}
