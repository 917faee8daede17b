//! Battle report - the adjudicator's verdict on a fight between two monsters

use serde::{Deserialize, Serialize};

/// Outcome of a battle as declared by the generation backend
///
/// `victor` is only a claim until it has been matched against the contestants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub victor: String,
    pub narrative: String,
}

impl BattleReport {
    /// Whether the declared victor is the monster with this name, ignoring surrounding whitespace
    pub fn names(&self, name: &str) -> bool {
        self.victor.trim() == name.trim()
    }
}
