//! Prompt building functions for monster generation requests

use crate::domain::entities::{Monster, MonsterDraft};
use crate::domain::value_objects::{Ability, MAX_STAT, MIN_STAT};

/// Build the drafting instruction for a brand new monster
pub fn build_new_monster_prompt(references: &[Monster]) -> String {
    let rendered: Vec<String> = references.iter().map(Monster::render).collect();

    let mut prompt = String::new();
    prompt.push_str("Generate a new monster for my game, similar to these: ");
    prompt.push_str(&rendered.join(", "));
    prompt.push('\n');
    prompt.push_str(
        "The new monster should have a unique name, description, and statistics. \
         Be succinct and creative.\n",
    );
    prompt
}

/// Build the drafting instruction for a fusion of two monsters
pub fn build_fusion_prompt(first: &Monster, second: &Monster) -> String {
    let mut prompt = String::new();
    prompt.push_str(
        "Generate a new species of monster that is a fusion of two existing monsters.\n",
    );
    prompt.push_str(&format!("Monster 1: {}\n", first.render()));
    prompt.push_str(&format!("Monster 2: {}\n\n", second.render()));
    prompt.push_str(
        "The new monster should have a fitting name and statistics creatively combining \
         the attributes of both monsters.\n",
    );
    prompt.push_str(
        "Its description should reflect its character and unique features, \
         without directly mentioning its parents.\n",
    );
    prompt.push_str(
        "Keep it concise and creative, using the parent monsters as style guides.\n",
    );
    prompt
}

/// Build the ability-selection instruction for a drafted monster
///
/// The whole vocabulary is embedded so the backend is constrained by context as
/// well as by the response schema.
pub fn build_ability_prompt(draft: &MonsterDraft) -> String {
    format!(
        "What ability fits this monster best: {},\n{}\nChoose exactly one from the following: {}\n",
        draft.name(),
        draft.description(),
        Ability::vocabulary()
    )
}

/// Build the adjudication instruction for a battle
pub fn build_battle_prompt(first: &Monster, second: &Monster) -> String {
    let mut prompt = String::new();
    prompt.push_str(&format!(
        "Choose a winner in a fight between these two monsters. Stats are between {} and {}, \
         with higher numbers indicating stronger attributes. Take the monsters' abilities \
         into account along with their stats.\n",
        MIN_STAT, MAX_STAT
    ));
    prompt.push_str(&format!("Monster 1: {}\n", first.render()));
    prompt.push_str(&format!("Monster 2: {}\n\n", second.render()));
    prompt.push_str(&format!(
        "The victor must be exactly \"{}\" or \"{}\".\n",
        first.name(),
        second.name()
    ));
    prompt.push_str(
        "Describe the battle outcome, including any special abilities used by the final winner.\n",
    );
    prompt
}

/// Tighten an instruction after the previous attempt broke the response contract
pub fn build_retry_prompt(instruction: &str, violation: &str) -> String {
    format!(
        "{}\nYour previous answer was rejected: {}\n\
         Respond only with JSON that matches the requested schema exactly.\n",
        instruction, violation
    )
}
