use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Caller-supplied default values, keyed by template column name. A default
/// applies identically to every output row for a column the roster does not
/// satisfy; it is supplied once per import, typically from a form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldDefaults(BTreeMap<String, String>);

impl FieldDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object of column name to value, e.g. `{"shirt_size":"M"}`.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(ModelError::DefaultsFormat)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.0.insert(column.into(), value.into());
    }

    /// The raw default for a column, if one was supplied.
    pub fn value(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    /// True if the column has a default that is non-empty after trimming.
    pub fn has_non_empty(&self, column: &str) -> bool {
        self.value(column)
            .is_some_and(|value| !value.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, String)> for FieldDefaults {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
