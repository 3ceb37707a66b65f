//! Roster importer library surface.
//!
//! Exposes the import pipeline and logging setup so integration tests and
//! embedders can drive an import without going through the binary.

pub mod logging;
pub mod pipeline;
