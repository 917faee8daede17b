//! Monster synthesis service
//!
//! New monsters are built in two generation stages, driven as a small state
//! machine:
//!
//! - **Drafting**: ask for name, description and stats, either inspired by the
//!   reference bestiary or fused from two parents. The ability in the draft is
//!   raw text and never reaches the result.
//! - **Ability resolution**: ask the backend to pick one ability from the
//!   vocabulary for the drafted monster.
//! - **Complete**: the draft is resolved into a [`Monster`].
//!
//! A failure in any stage aborts the whole synthesis.

use std::sync::Arc;

use crate::application::ports::outbound::{GeneratorError, StructuredGeneratorPort};
use crate::application::services::llm::prompt_builder::{
    build_ability_prompt, build_fusion_prompt, build_new_monster_prompt,
};
use crate::application::services::llm::{AbilityChoice, GenerationPolicy};
use crate::application::services::MonsterError;
use crate::domain::entities::{reference_bestiary, Monster, MonsterDraft};

/// Where the first stage takes its inspiration from
#[derive(Debug, Clone, Copy)]
enum DraftSource<'a> {
    Bestiary,
    Fusion(&'a Monster, &'a Monster),
}

#[derive(Debug)]
enum SynthesisState {
    Drafting,
    AbilityResolution(MonsterDraft),
    Complete(Monster),
}

/// Service that synthesizes new monsters
pub struct MonsterSynthesisService<G: StructuredGeneratorPort + ?Sized> {
    generator: Arc<G>,
    policy: GenerationPolicy,
    references: Vec<Monster>,
}

impl<G: StructuredGeneratorPort + ?Sized> MonsterSynthesisService<G> {
    pub fn new(generator: Arc<G>, policy: GenerationPolicy) -> Self {
        Self {
            generator,
            policy,
            references: reference_bestiary(),
        }
    }

    /// Generate a brand new monster in the style of the reference bestiary
    pub async fn synthesize_new(&self) -> Result<Monster, MonsterError> {
        self.run(DraftSource::Bestiary).await
    }

    /// Fuse two monsters into a new one that does not echo either parent
    pub async fn synthesize_fusion(
        &self,
        first: &Monster,
        second: &Monster,
    ) -> Result<Monster, MonsterError> {
        self.run(DraftSource::Fusion(first, second)).await
    }

    async fn run(&self, source: DraftSource<'_>) -> Result<Monster, MonsterError> {
        let mut state = SynthesisState::Drafting;

        loop {
            state = match state {
                SynthesisState::Drafting => {
                    let draft = self.draft(source).await?;
                    tracing::info!(
                        "Drafted monster '{}' (placeholder ability '{}')",
                        draft.name(),
                        draft.placeholder_ability().as_str()
                    );
                    tracing::debug!("Drafted stats for '{}': {}", draft.name(), draft.stats());
                    SynthesisState::AbilityResolution(draft)
                }
                SynthesisState::AbilityResolution(draft) => {
                    let choice: AbilityChoice = self
                        .policy
                        .generate(
                            self.generator.as_ref(),
                            "ability_resolution",
                            &build_ability_prompt(&draft),
                        )
                        .await?;
                    tracing::info!("Resolved ability {} for '{}'", choice.ability, draft.name());
                    SynthesisState::Complete(draft.resolve(choice.ability))
                }
                SynthesisState::Complete(monster) => {
                    tracing::debug!("Completed '{}': {}", monster.name(), monster.stats());
                    return Ok(monster);
                }
            };
        }
    }

    async fn draft(&self, source: DraftSource<'_>) -> Result<MonsterDraft, GeneratorError> {
        match source {
            DraftSource::Bestiary => {
                self.policy
                    .generate(
                        self.generator.as_ref(),
                        "drafting",
                        &build_new_monster_prompt(&self.references),
                    )
                    .await
            }
            DraftSource::Fusion(first, second) => {
                self.policy
                    .generate_checked(
                        self.generator.as_ref(),
                        "fusion_drafting",
                        &build_fusion_prompt(first, second),
                        |draft: &MonsterDraft| reject_parent_echo(draft, first, second),
                    )
                    .await
            }
        }
    }
}

fn squash(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A fused draft must not reuse a parent's name, the parents' joined names, or
/// a parent's description verbatim.
fn reject_parent_echo(
    draft: &MonsterDraft,
    first: &Monster,
    second: &Monster,
) -> Result<(), GeneratorError> {
    let name = squash(draft.name());
    let (a, b) = (squash(first.name()), squash(second.name()));
    let echoed_names = [a.clone(), b.clone(), format!("{}{}", a, b), format!("{}{}", b, a)];

    if echoed_names.contains(&name) {
        return Err(GeneratorError::ContractViolation(format!(
            "fused monster name '{}' echoes its parents",
            draft.name()
        )));
    }

    for parent in [first, second] {
        let parent_description = parent.description().trim();
        if !parent_description.is_empty() && draft.description().contains(parent_description) {
            return Err(GeneratorError::ContractViolation(format!(
                "fused monster description repeats the description of '{}'",
                parent.name()
            )));
        }
    }

    Ok(())
}
