//! Battle service - adjudicates a fight between two monsters
//!
//! The backend is asked once for a [`BattleReport`]. The declared victor is
//! not trusted: it must name one of the two contestants, otherwise the battle
//! fails with a judgment consistency error instead of guessing a winner.

use std::sync::Arc;

use crate::application::ports::outbound::StructuredGeneratorPort;
use crate::application::services::llm::prompt_builder::build_battle_prompt;
use crate::application::services::llm::GenerationPolicy;
use crate::application::services::MonsterError;
use crate::domain::entities::{BattleReport, Monster};
use crate::domain::errors::ValidationError;

pub struct BattleService<G: StructuredGeneratorPort + ?Sized> {
    generator: Arc<G>,
    policy: GenerationPolicy,
}

impl<G: StructuredGeneratorPort + ?Sized> BattleService<G> {
    pub fn new(generator: Arc<G>, policy: GenerationPolicy) -> Self {
        Self { generator, policy }
    }

    /// Decide the winner and return it with the battle narrative as its description
    pub async fn adjudicate(&self, first: Monster, second: Monster) -> Result<Monster, MonsterError> {
        // Victor matching ignores surrounding whitespace, so contestants must differ without it
        if first.name().trim() == second.name().trim() {
            return Err(ValidationError::DuplicateContestant(first.name().to_string()).into());
        }

        let report: BattleReport = self
            .policy
            .generate(
                self.generator.as_ref(),
                "adjudication",
                &build_battle_prompt(&first, &second),
            )
            .await?;

        if report.names(first.name()) {
            tracing::info!("{} defeats {} with {}", first.name(), second.name(), first.ability());
            Ok(first.crowned_victor(&report.narrative))
        } else if report.names(second.name()) {
            tracing::info!("{} defeats {} with {}", second.name(), first.name(), second.ability());
            Ok(second.crowned_victor(&report.narrative))
        } else {
            tracing::warn!(
                "Rejected battle report naming '{}' as victor of {} vs {}",
                report.victor,
                first.name(),
                second.name()
            );
            Err(MonsterError::JudgmentConsistency {
                victor: report.victor,
                first: first.name().to_string(),
                second: second.name().to_string(),
            })
        }
    }
}
