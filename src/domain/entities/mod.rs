//! Domain entities

mod battle_report;
mod bestiary;
mod monster;

pub use battle_report::BattleReport;
pub use bestiary::reference_bestiary;
pub use monster::{Monster, MonsterDraft};
