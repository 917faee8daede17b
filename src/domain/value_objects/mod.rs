//! Value objects - Immutable objects defined by their attributes

mod ability;
mod stats;

pub use ability::Ability;
pub use stats::{Stats, MAX_STAT, MIN_STAT};
