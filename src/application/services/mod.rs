//! Application services - Use case implementations
//!
//! The monster services coordinate the structured generator: synthesis of new
//! and fused monsters, battle adjudication, and the tool layer that wraps both
//! into uniform responses.

pub mod battle_service;
pub mod llm;
pub mod monster_error;
pub mod monster_tool_service;
pub mod synthesis_service;

pub use battle_service::BattleService;
pub use monster_error::MonsterError;
pub use monster_tool_service::{MonsterTool, MonsterToolService};
pub use synthesis_service::MonsterSynthesisService;
