use thiserror::Error;

/// Structural matching failures that reject an import before any row is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error(
        "CSV must include First Name, Last Name, and Email columns \
         (any common header variation is accepted); missing: {}",
        .0.join(", ")
    )]
    MissingRosterFields(Vec<&'static str>),
}
