//! Building blocks for talking to the structured generator: prompts, response
//! schemas, and the per-stage call policy.

pub mod policy;
pub mod prompt_builder;
pub mod schemas;

pub use policy::GenerationPolicy;
pub use schemas::AbilityChoice;
