//! Monster tool service - the externally callable tools
//!
//! Each tool runs one core operation and turns the outcome into a
//! [`ToolResponse`]. Every error, including undecodable arguments, becomes a
//! `{"success": false, "message": ...}` envelope; nothing is retried here.

use std::str::FromStr;
use std::sync::Arc;

use crate::application::dto::{MonsterPairArgs, ToolDefinition, ToolResponse};
use crate::application::ports::outbound::StructuredGeneratorPort;
use crate::application::services::llm::GenerationPolicy;
use crate::application::services::{BattleService, MonsterError, MonsterSynthesisService};
use crate::domain::entities::Monster;

/// The tools this server exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterTool {
    GenerateMonster,
    Battle,
    Fuse,
}

impl MonsterTool {
    pub const ALL: [MonsterTool; 3] = [Self::GenerateMonster, Self::Battle, Self::Fuse];

    pub fn name(&self) -> &'static str {
        match self {
            Self::GenerateMonster => "generate_monster",
            Self::Battle => "battle",
            Self::Fuse => "fuse",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::GenerateMonster => {
                "Generate a new monster with a unique name, description, stats, and ability."
            }
            Self::Battle => "Battle two monsters and return the victor.",
            Self::Fuse => "Fuse two monsters into a new monster.",
        }
    }

    pub fn definition(&self) -> ToolDefinition {
        let input_schema = match self {
            Self::GenerateMonster => serde_json::json!({
                "type": "object",
                "properties": {},
            }),
            Self::Battle | Self::Fuse => serde_json::json!({
                "type": "object",
                "properties": {
                    "monster1": monster_schema(),
                    "monster2": monster_schema(),
                },
                "required": ["monster1", "monster2"],
            }),
        };

        ToolDefinition {
            name: self.name(),
            description: self.description(),
            input_schema,
        }
    }
}

impl FromStr for MonsterTool {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.name() == name)
            .ok_or_else(|| format!("Unknown tool: {}", name))
    }
}

fn monster_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "name": { "type": "string", "minLength": 1 },
            "description": { "type": "string" },
            "stats": crate::domain::value_objects::Stats::json_schema(),
            "ability": {
                "type": "string",
                "enum": crate::domain::value_objects::Ability::wire_names(),
            },
        },
        "required": ["name", "description", "stats", "ability"],
    })
}

/// Service backing the tool endpoints
pub struct MonsterToolService<G: StructuredGeneratorPort + ?Sized> {
    synthesis: MonsterSynthesisService<G>,
    battles: BattleService<G>,
}

impl<G: StructuredGeneratorPort + ?Sized> MonsterToolService<G> {
    pub fn new(generator: Arc<G>, policy: GenerationPolicy) -> Self {
        Self {
            synthesis: MonsterSynthesisService::new(generator.clone(), policy),
            battles: BattleService::new(generator, policy),
        }
    }

    /// Definitions of every tool, for discovery
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        MonsterTool::ALL.iter().map(MonsterTool::definition).collect()
    }

    /// Run a tool with JSON arguments
    pub async fn call(&self, tool: MonsterTool, arguments: serde_json::Value) -> ToolResponse {
        tracing::info!("Tool call: {}", tool.name());

        let outcome = match tool {
            MonsterTool::GenerateMonster => self.generate_monster().await,
            MonsterTool::Battle => match decode_pair(arguments) {
                Ok(args) => self.battle(args).await,
                Err(message) => return failed(tool, message),
            },
            MonsterTool::Fuse => match decode_pair(arguments) {
                Ok(args) => self.fuse(args).await,
                Err(message) => return failed(tool, message),
            },
        };

        match outcome {
            Ok(monster) => {
                tracing::info!("{} produced '{}'", tool.name(), monster.name());
                ToolResponse::success(monster)
            }
            Err(e) => failed(tool, e.to_string()),
        }
    }

    pub async fn generate_monster(&self) -> Result<Monster, MonsterError> {
        self.synthesis.synthesize_new().await
    }

    pub async fn battle(&self, args: MonsterPairArgs) -> Result<Monster, MonsterError> {
        tracing::info!("Battling {} vs {}", args.monster1.name(), args.monster2.name());
        self.battles.adjudicate(args.monster1, args.monster2).await
    }

    pub async fn fuse(&self, args: MonsterPairArgs) -> Result<Monster, MonsterError> {
        tracing::info!("Fusing {} and {}", args.monster1.name(), args.monster2.name());
        self.synthesis
            .synthesize_fusion(&args.monster1, &args.monster2)
            .await
    }
}

fn decode_pair(arguments: serde_json::Value) -> Result<MonsterPairArgs, String> {
    serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {}", e))
}

fn failed(tool: MonsterTool, message: String) -> ToolResponse {
    tracing::error!("Tool {} failed: {}", tool.name(), message);
    ToolResponse::failure(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::testing::{draft_json, ScriptedGenerator};
    use crate::application::ports::outbound::GeneratorError;
    use crate::domain::entities::reference_bestiary;

    fn tools(generator: Arc<ScriptedGenerator>) -> MonsterToolService<ScriptedGenerator> {
        MonsterToolService::new(generator, GenerationPolicy::default())
    }

    fn pair(first: usize, second: usize) -> serde_json::Value {
        let bestiary = reference_bestiary();
        serde_json::json!({ "monster1": bestiary[first], "monster2": bestiary[second] })
    }

    #[test]
    fn test_tool_names_roundtrip() {
        for tool in MonsterTool::ALL {
            assert_eq!(tool.name().parse::<MonsterTool>().unwrap(), tool);
        }
        assert!("summon_dragon".parse::<MonsterTool>().is_err());
    }

    #[test]
    fn test_definitions_describe_arguments() {
        let service = tools(Arc::new(ScriptedGenerator::new()));
        let definitions = service.definitions();

        assert_eq!(definitions.len(), 3);
        let battle = definitions.iter().find(|d| d.name == "battle").unwrap();
        assert_eq!(
            battle.input_schema["required"],
            serde_json::json!(["monster1", "monster2"])
        );
    }

    #[tokio::test]
    async fn test_generate_monster_success_envelope() {
        let generator = Arc::new(
            ScriptedGenerator::new()
                .then_ok(draft_json("Bramblecat", "A cat woven from thorns", "thorns"))
                .then_ok(serde_json::json!({ "ability": "NATURE" })),
        );

        let response = tools(generator)
            .call(MonsterTool::GenerateMonster, serde_json::Value::Null)
            .await;
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["name"], "Bramblecat");
        assert_eq!(json["ability"], "NATURE");
    }

    #[tokio::test]
    async fn test_backend_failure_becomes_failure_envelope() {
        let generator = Arc::new(ScriptedGenerator::new().then_err(
            GeneratorError::BackendUnavailable("connection refused".to_string()),
        ));

        let response = tools(generator)
            .call(MonsterTool::GenerateMonster, serde_json::Value::Null)
            .await;

        assert!(!response.success);
        assert!(response.monster.is_none());
        assert_eq!(
            response.message.as_deref(),
            Some("Backend unavailable: connection refused")
        );
    }

    #[tokio::test]
    async fn test_battle_judgment_violation_becomes_failure() {
        let generator = Arc::new(ScriptedGenerator::new().then_ok(serde_json::json!({
            "victor": "Nobody",
            "narrative": "They both left."
        })));

        let response = tools(generator).call(MonsterTool::Battle, pair(0, 2)).await;

        assert!(!response.success);
        assert!(response
            .message
            .unwrap()
            .contains("Judgment consistency violation"));
    }

    #[tokio::test]
    async fn test_battle_returns_winner() {
        let generator = Arc::new(ScriptedGenerator::new().then_ok(serde_json::json!({
            "victor": "Nymph",
            "narrative": "The nymph healed through every blow."
        })));

        let response = tools(generator).call(MonsterTool::Battle, pair(1, 3)).await;

        assert!(response.success);
        let winner = response.monster.unwrap();
        assert_eq!(winner.name(), "Nymph");
        assert!(winner.description().contains("Nymph wins the battle!"));
    }

    #[tokio::test]
    async fn test_fuse_with_bad_arguments_skips_generation() {
        let generator = Arc::new(ScriptedGenerator::new());
        let mut args = pair(0, 1);
        args["monster1"]["stats"]["health"] = serde_json::json!(0);

        let response = tools(generator.clone()).call(MonsterTool::Fuse, args).await;

        assert!(!response.success);
        assert!(response.message.unwrap().starts_with("Invalid arguments"));
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_fuse_success() {
        let generator = Arc::new(
            ScriptedGenerator::new()
                .then_ok(draft_json("Tempest Stag", "Antlers crackle with static", "zap"))
                .then_ok(serde_json::json!({ "ability": "LIGHTNING" })),
        );

        let response = tools(generator).call(MonsterTool::Fuse, pair(2, 4)).await;

        assert!(response.success);
        assert_eq!(response.monster.unwrap().name(), "Tempest Stag");
    }
}
