use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("template store is not valid JSON: {0}")]
    StoreFormat(serde_json::Error),
    #[error("template {0} not found")]
    TemplateNotFound(u64),
    #[error("template '{template}' declares column '{column}' more than once")]
    DuplicateColumn { template: String, column: String },
    #[error("field defaults are not a valid JSON object: {0}")]
    DefaultsFormat(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
