//! Data model for the roster import engine.
//!
//! Defines the admin-owned [`Template`], the caller-supplied
//! [`FieldDefaults`], and the read-only [`TemplateStore`] collaborator.

mod defaults;
mod error;
mod store;
mod template;

pub use defaults::FieldDefaults;
pub use error::{ModelError, Result};
pub use store::TemplateStore;
pub use template::{REQUIRED_MARKER, Template};
