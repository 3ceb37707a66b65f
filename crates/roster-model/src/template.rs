use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Reserved prefix marking a template column as required by convention.
pub const REQUIRED_MARKER: char = '#';

/// An admin-defined output template: an ordered set of column names with a
/// required subset. Column order is semantically significant and defines the
/// output column order. Templates are immutable once an import runs against
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: u64,
    pub name: String,
    pub event_name: String,
    pub race_name: String,
    pub ticket_name: String,
    /// Output columns in declaration order.
    pub columns: Vec<String>,
    /// Columns flagged required explicitly (in addition to marker-prefixed ones).
    #[serde(default)]
    pub required_columns: Vec<String>,
}

impl Template {
    /// True if the column is required, either by the reserved marker prefix
    /// or by an explicit `required_columns` entry.
    pub fn is_required(&self, column: &str) -> bool {
        column.starts_with(REQUIRED_MARKER)
            || self.required_columns.iter().any(|name| name == column)
    }

    /// Required columns in declaration order.
    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|column| self.is_required(column))
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Checks the uniqueness invariant: a column name may appear only once.
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::BTreeSet::new();
        for column in &self.columns {
            if !seen.insert(column.as_str()) {
                return Err(ModelError::DuplicateColumn {
                    template: self.name.clone(),
                    column: column.clone(),
                });
            }
        }
        Ok(())
    }
}
