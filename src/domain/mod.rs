//! Domain layer - Core monster model with no knowledge of transports or backends
//!
//! This layer contains:
//! - Entities: Monster, MonsterDraft, BattleReport
//! - Value Objects: Ability vocabulary, Stats block
//! - The reference bestiary used as generation style guides
//! - Validation errors for data-model invariants

pub mod entities;
pub mod errors;
pub mod value_objects;
