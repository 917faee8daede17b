//! Response schemas for each generation stage

use serde::Deserialize;

use crate::application::ports::outbound::GenerationSchema;
use crate::domain::entities::{BattleReport, MonsterDraft};
use crate::domain::value_objects::{Ability, Stats};

/// Second-stage answer: one ability from the vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AbilityChoice {
    pub ability: Ability,
}

impl GenerationSchema for MonsterDraft {
    const SCHEMA_NAME: &'static str = "monster";

    fn json_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "minLength": 1 },
                "description": { "type": "string", "minLength": 1 },
                "stats": Stats::json_schema(),
                "ability": { "type": "string" },
            },
            "required": ["name", "description", "stats", "ability"],
            "additionalProperties": false,
        })
    }
}

impl GenerationSchema for AbilityChoice {
    const SCHEMA_NAME: &'static str = "ability";

    fn json_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "ability": { "type": "string", "enum": Ability::wire_names() },
            },
            "required": ["ability"],
            "additionalProperties": false,
        })
    }
}

impl GenerationSchema for BattleReport {
    const SCHEMA_NAME: &'static str = "battle_report";

    fn json_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "victor": { "type": "string" },
                "narrative": { "type": "string" },
            },
            "required": ["victor", "narrative"],
            "additionalProperties": false,
        })
    }
}
