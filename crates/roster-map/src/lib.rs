//! Header canonicalization and column matching for roster imports.

mod error;
mod matcher;
mod normalize;
mod roster;

pub use error::MatchError;
pub use matcher::{ColumnMapping, MappedColumn, match_columns};
pub use normalize::{keys_equal, normalize_key};
pub use roster::{RosterField, find_roster_header, is_roster_field, require_roster_fields};
