//! Tool DTOs - argument and response shapes for the monster tools

use serde::{Deserialize, Serialize};

use crate::domain::entities::Monster;

/// Arguments for tools that take two monsters (`battle`, `fuse`)
#[derive(Debug, Clone, Deserialize)]
pub struct MonsterPairArgs {
    pub monster1: Monster,
    pub monster2: Monster,
}

/// Uniform tool result envelope
///
/// Success serializes as `{"success": true, "name": ..., "description": ...,
/// "stats": {...}, "ability": ...}`, failure as `{"success": false, "message": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResponse {
    pub success: bool,
    #[serde(flatten)]
    pub monster: Option<Monster>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ToolResponse {
    pub fn success(monster: Monster) -> Self {
        Self {
            success: true,
            monster: Some(monster),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            monster: None,
            message: Some(message.into()),
        }
    }
}

/// Tool description as advertised to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::reference_bestiary;

    #[test]
    fn test_success_envelope_flattens_monster() {
        let deer = reference_bestiary()[2].clone();
        let value = serde_json::to_value(ToolResponse::success(deer)).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["name"], "Deer");
        assert_eq!(value["ability"], "STEALTH");
        assert_eq!(value["stats"]["stealth"], 90);
        assert!(value.get("message").is_none());
    }

    #[test]
    fn test_failure_envelope() {
        let value = serde_json::to_value(ToolResponse::failure("Backend unavailable: down")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "success": false, "message": "Backend unavailable: down" })
        );
    }

    #[test]
    fn test_pair_args_validate_monsters() {
        let bestiary = reference_bestiary();
        let mut args = serde_json::json!({
            "monster1": bestiary[0],
            "monster2": bestiary[1],
        });
        assert!(serde_json::from_value::<MonsterPairArgs>(args.clone()).is_ok());

        args["monster2"]["ability"] = serde_json::json!("LASER");
        assert!(serde_json::from_value::<MonsterPairArgs>(args).is_err());
    }
}
