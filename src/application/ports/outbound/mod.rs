//! Outbound ports - Interfaces that the application requires from external systems

mod generator_port;

#[cfg(test)]
pub mod testing;

pub use generator_port::{
    GenerationRequest, GenerationSchema, GeneratorError, StructuredGeneratorPort,
};
