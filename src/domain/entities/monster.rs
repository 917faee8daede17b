//! Monster entity and its in-progress draft form
//!
//! A [`MonsterDraft`] is what the first generation stage produces: every field
//! is validated except the ability, which is still raw backend text. The only
//! way to obtain a [`Monster`] from a draft is [`MonsterDraft::resolve`], which
//! requires a vocabulary [`Ability`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;
use crate::domain::value_objects::{Ability, Stats};

/// A creature with a name, flavour text, stat block and one ability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MonsterRecord")]
pub struct Monster {
    name: String,
    description: String,
    stats: Stats,
    ability: Ability,
}

/// Unvalidated wire form of a [`Monster`]
#[derive(Debug, Deserialize)]
struct MonsterRecord {
    name: String,
    #[serde(default)]
    description: String,
    stats: Stats,
    ability: Ability,
}

impl TryFrom<MonsterRecord> for Monster {
    type Error = ValidationError;

    fn try_from(record: MonsterRecord) -> Result<Self, Self::Error> {
        Monster::new(record.name, record.description, record.stats, record.ability)
    }
}

impl Monster {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        stats: Stats,
        ability: Ability,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }

        Ok(Self {
            name,
            description: description.into(),
            stats,
            ability,
        })
    }

    /// Built-in monsters whose names are known to be non-empty
    pub(crate) fn from_trusted(
        name: &str,
        description: &str,
        stats: Stats,
        ability: Ability,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            stats,
            ability,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn ability(&self) -> Ability {
        self.ability
    }

    /// Canonical one-line rendering used in every generation prompt
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Replace the description with a battle narrative and the victory line
    pub(crate) fn crowned_victor(mut self, narrative: &str) -> Self {
        self.description = format!("{}\n{}", narrative, victory_line(&self.name));
        self
    }
}

/// Line appended to the winner's description after a battle
fn victory_line(name: &str) -> String {
    format!("{} wins the battle!", name)
}

impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Description: {}, Stats: {}, Ability: {}",
            self.name, self.description, self.stats, self.ability
        )
    }
}

/// Ability text proposed by the drafting stage, not yet checked against the vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawAbility(String);

impl RawAbility {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// First-stage output of monster synthesis
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "DraftRecord")]
pub struct MonsterDraft {
    name: String,
    description: String,
    stats: Stats,
    placeholder_ability: RawAbility,
}

#[derive(Debug, Deserialize)]
struct DraftRecord {
    name: String,
    description: String,
    stats: Stats,
    #[serde(default)]
    ability: RawAbility,
}

impl TryFrom<DraftRecord> for MonsterDraft {
    type Error = ValidationError;

    fn try_from(record: DraftRecord) -> Result<Self, Self::Error> {
        if record.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if record.description.trim().is_empty() {
            return Err(ValidationError::EmptyField("description"));
        }

        Ok(Self {
            name: record.name,
            description: record.description,
            stats: record.stats,
            placeholder_ability: record.ability,
        })
    }
}

impl MonsterDraft {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn placeholder_ability(&self) -> &RawAbility {
        &self.placeholder_ability
    }

    /// Finish the draft with an ability chosen from the vocabulary
    pub fn resolve(self, ability: Ability) -> Monster {
        Monster {
            name: self.name,
            description: self.description,
            stats: self.stats,
            ability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragon_json() -> serde_json::Value {
        serde_json::json!({
            "name": "Dragon",
            "description": "A fierce dragon with scales as tough as steel",
            "stats": {
                "health": 100, "defense": 90, "strength": 80, "intelligence": 70,
                "speed": 100, "magic": 90, "stealth": 30, "luck": 50, "charm": 50
            },
            "ability": "FIRE"
        })
    }

    #[test]
    fn test_monster_roundtrip_wire_shape() {
        let monster: Monster = serde_json::from_value(dragon_json()).unwrap();
        assert_eq!(monster.name(), "Dragon");
        assert_eq!(monster.ability(), Ability::Fire);
        assert_eq!(serde_json::to_value(&monster).unwrap(), dragon_json());
    }

    #[test]
    fn test_monster_rejects_empty_name() {
        let mut json = dragon_json();
        json["name"] = serde_json::json!("   ");
        let err = serde_json::from_value::<Monster>(json).unwrap_err();
        assert!(err.to_string().contains("name must not be empty"));
    }

    #[test]
    fn test_monster_rejects_out_of_range_stats() {
        let mut json = dragon_json();
        json["stats"]["defense"] = serde_json::json!(0);
        assert!(serde_json::from_value::<Monster>(json).is_err());
    }

    #[test]
    fn test_render_is_canonical_and_idempotent() {
        let monster: Monster = serde_json::from_value(dragon_json()).unwrap();
        let first = monster.render();
        let second = monster.render();
        assert_eq!(first, second);
        assert_eq!(
            first,
            "Name: Dragon, Description: A fierce dragon with scales as tough as steel, \
             Stats: Health: 100, Defense: 90, Strength: 80, Intelligence: 70, Speed: 100, \
             Magic: 90, Stealth: 30, Luck: 50, Charm: 50, Ability: FIRE"
        );
    }

    #[test]
    fn test_crowned_victor_appends_victory_line() {
        let monster: Monster = serde_json::from_value(dragon_json()).unwrap();
        let winner = monster.crowned_victor("The dragon scorched the field.");
        assert_eq!(
            winner.description(),
            "The dragon scorched the field.\nDragon wins the battle!"
        );
        assert_eq!(winner.name(), "Dragon");
    }

    #[test]
    fn test_draft_keeps_placeholder_until_resolved() {
        let mut json = dragon_json();
        json["ability"] = serde_json::json!("breathes really hot fire");
        let draft: MonsterDraft = serde_json::from_value(json).unwrap();
        assert_eq!(draft.placeholder_ability().as_str(), "breathes really hot fire");

        let monster = draft.resolve(Ability::Fire);
        assert_eq!(monster.ability(), Ability::Fire);
        assert_eq!(monster.name(), "Dragon");
    }

    #[test]
    fn test_draft_ability_is_optional() {
        let mut json = dragon_json();
        json.as_object_mut().unwrap().remove("ability");
        let draft: MonsterDraft = serde_json::from_value(json).unwrap();
        assert_eq!(draft.placeholder_ability().as_str(), "");
    }

    #[test]
    fn test_draft_requires_name_and_description() {
        let mut json = dragon_json();
        json["description"] = serde_json::json!("");
        assert!(serde_json::from_value::<MonsterDraft>(json).is_err());
    }
}
