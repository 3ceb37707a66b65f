//! Header canonicalization.
//!
//! A raw column name is reduced to a canonical key: leading required-column
//! markers stripped, lowercased, everything outside `[a-z0-9]` removed, then
//! known synonyms collapsed through a static alias table. Pure and total;
//! names with no alias simply normalize to their stripped-lowercased form.

use roster_model::REQUIRED_MARKER;

/// Alias table collapsing surface spellings to one canonical key. Keys here
/// are already in normalized (marker-stripped, alphanumeric, lowercase) form.
const ALIASES: &[(&str, &str)] = &[
    ("emailaddress", "email"),
    ("emailaddr", "email"),
    ("emailadress", "email"),
    ("mail", "email"),
    ("fname", "firstname"),
    ("forename", "firstname"),
    ("givenname", "firstname"),
    ("lname", "lastname"),
    ("surname", "lastname"),
    ("familyname", "lastname"),
    ("dob", "dateofbirth"),
    ("birthdate", "dateofbirth"),
    ("birthday", "dateofbirth"),
];

fn resolve_alias(key: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map_or(key, |(_, canonical)| canonical)
}

/// Canonical key for a raw column name.
pub fn normalize_key(raw: &str) -> String {
    let stripped = raw.trim().trim_start_matches(REQUIRED_MARKER);
    let mut key = String::with_capacity(stripped.len());
    for ch in stripped.chars() {
        if ch.is_ascii_alphanumeric() {
            key.push(ch.to_ascii_lowercase());
        }
    }
    resolve_alias(&key).to_string()
}

/// True when two raw names share a canonical key.
pub fn keys_equal(a: &str, b: &str) -> bool {
    normalize_key(a) == normalize_key(b)
}
