//! Error type shared by the monster services

use crate::application::ports::outbound::GeneratorError;
use crate::domain::errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonsterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generation(#[from] GeneratorError),
    /// The adjudicator named a victor who was not in the fight
    #[error(
        "Judgment consistency violation: declared victor '{victor}' is neither '{first}' nor '{second}'"
    )]
    JudgmentConsistency {
        victor: String,
        first: String,
        second: String,
    },
}
