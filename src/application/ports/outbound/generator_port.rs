//! Structured generator port - the contract the monster services need from a
//! text-generation backend.
//!
//! A generator receives a JSON schema plus a natural-language instruction and
//! answers with a JSON value that is supposed to conform to that schema. Each
//! call is independent; no conversation state is carried between calls.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// A single structured-generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Short identifier for the schema (sent to backends that want a name)
    pub schema_name: String,
    /// JSON schema the response must satisfy
    pub schema: serde_json::Value,
    /// The natural-language instruction
    pub instruction: String,
    /// Optional sampling temperature
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    pub fn new(
        schema_name: impl Into<String>,
        schema: serde_json::Value,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            schema_name: schema_name.into(),
            schema,
            instruction: instruction.into(),
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Failures a generator can report
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// The backend could not be reached, initialized, or did not answer in time
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),
    /// The backend answered, but not with a value matching the requested schema
    #[error("Generation contract violation: {0}")]
    ContractViolation(String),
}

/// Port for schema-constrained generation
#[async_trait]
pub trait StructuredGeneratorPort: Send + Sync {
    /// Generate a JSON value for the request's schema
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<serde_json::Value, GeneratorError>;

    /// Check that the backend is reachable
    async fn health_check(&self) -> Result<(), GeneratorError>;
}

/// A type that can be requested from a structured generator
pub trait GenerationSchema: DeserializeOwned {
    /// Identifier sent alongside the schema
    const SCHEMA_NAME: &'static str;

    /// JSON schema describing the wire form of the type
    fn json_schema() -> serde_json::Value;

    /// Decode a generator response, treating any mismatch as a contract violation
    fn from_generated(value: serde_json::Value) -> Result<Self, GeneratorError> {
        serde_json::from_value(value).map_err(|e| {
            GeneratorError::ContractViolation(format!(
                "response does not match {}: {}",
                Self::SCHEMA_NAME,
                e
            ))
        })
    }
}
