//! Domain validation errors

/// A value failed one of the data-model invariants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Validation error: {field} must be between {min} and {max}, got {value}")]
    StatOutOfRange {
        field: &'static str,
        value: i64,
        min: u8,
        max: u8,
    },
    #[error("Validation error: {0} must not be empty")]
    EmptyField(&'static str),
    #[error("Validation error: unknown ability '{0}'")]
    UnknownAbility(String),
    #[error("Validation error: contestants must have distinct names, both are named '{0}'")]
    DuplicateContestant(String),
}
