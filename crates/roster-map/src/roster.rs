//! Canonical roster fields.
//!
//! Every roster must carry a first name, last name, and email column under
//! some common header variation; an import is rejected outright when any of
//! the three cannot be located.

use crate::error::MatchError;
use crate::normalize::normalize_key;

/// The three fields every uploaded roster must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RosterField {
    FirstName,
    LastName,
    Email,
}

impl RosterField {
    pub const ALL: [RosterField; 3] = [
        RosterField::FirstName,
        RosterField::LastName,
        RosterField::Email,
    ];

    /// Canonical key this field matches under.
    pub fn canonical_key(self) -> &'static str {
        match self {
            RosterField::FirstName => "firstname",
            RosterField::LastName => "lastname",
            RosterField::Email => "email",
        }
    }

    /// Human-readable label for error messages.
    pub fn label(self) -> &'static str {
        match self {
            RosterField::FirstName => "First Name",
            RosterField::LastName => "Last Name",
            RosterField::Email => "Email",
        }
    }

    /// The field a column name refers to, if any.
    pub fn of_column(column: &str) -> Option<RosterField> {
        let key = normalize_key(column);
        RosterField::ALL
            .into_iter()
            .find(|field| field.canonical_key() == key)
    }
}

/// True when the column names one of the canonical roster fields.
pub fn is_roster_field(column: &str) -> bool {
    RosterField::of_column(column).is_some()
}

/// First upload header matching the field's canonical key, in header order.
pub fn find_roster_header<'a>(headers: &'a [String], field: RosterField) -> Option<&'a str> {
    headers
        .iter()
        .map(String::as_str)
        .find(|header| normalize_key(header) == field.canonical_key())
}

/// Hard structural check: every canonical roster field must be locatable.
pub fn require_roster_fields(headers: &[String]) -> Result<(), MatchError> {
    let missing: Vec<&'static str> = RosterField::ALL
        .into_iter()
        .filter(|&field| find_roster_header(headers, field).is_none())
        .map(RosterField::label)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MatchError::MissingRosterFields(missing))
    }
}
