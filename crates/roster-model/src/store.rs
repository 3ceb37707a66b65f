//! JSON-file backed template store.
//!
//! Templates are owned by the admin back office; this side of the system
//! only reads them. The store document is a JSON object with a `templates`
//! array, matching the shape the back office serves.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::template::Template;

#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    templates: Vec<Template>,
}

/// Read-only collection of templates loaded from a store file.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    templates: Vec<Template>,
}

impl TemplateStore {
    /// Loads and validates a store document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parses and validates a store document from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        let document: StoreDocument =
            serde_json::from_str(raw).map_err(ModelError::StoreFormat)?;
        for template in &document.templates {
            template.validate()?;
        }
        Ok(Self {
            templates: document.templates,
        })
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn find(&self, id: u64) -> Option<&Template> {
        self.templates.iter().find(|template| template.id == id)
    }

    /// Like [`Self::find`] but an unknown id is an error.
    pub fn get(&self, id: u64) -> Result<&Template> {
        self.find(id).ok_or(ModelError::TemplateNotFound(id))
    }
}
