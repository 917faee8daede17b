//! Per-stage call policy for the structured generator
//!
//! Every generation stage goes through [`GenerationPolicy`], which decodes the
//! response into the stage's schema type and applies the configured deadline
//! and retry budget. Only contract violations are retried, each time with a
//! tightened instruction; an unavailable backend fails the stage immediately.

use std::time::Duration;

use crate::application::ports::outbound::{
    GenerationRequest, GenerationSchema, GeneratorError, StructuredGeneratorPort,
};
use crate::application::services::llm::prompt_builder::build_retry_prompt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationPolicy {
    /// Attempts per stage, including the first one
    pub max_attempts: u32,
    /// Deadline for a single generator call
    pub timeout: Option<Duration>,
    /// Sampling temperature forwarded to the backend
    pub temperature: Option<f32>,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            timeout: None,
            temperature: None,
        }
    }
}

impl GenerationPolicy {
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Run one generation stage
    pub async fn generate<T, G>(
        &self,
        generator: &G,
        stage: &'static str,
        instruction: &str,
    ) -> Result<T, GeneratorError>
    where
        T: GenerationSchema,
        G: StructuredGeneratorPort + ?Sized,
    {
        self.generate_checked(generator, stage, instruction, |_: &T| Ok(()))
            .await
    }

    /// Run one generation stage, with an extra acceptance check on the decoded value
    pub async fn generate_checked<T, G, F>(
        &self,
        generator: &G,
        stage: &'static str,
        instruction: &str,
        check: F,
    ) -> Result<T, GeneratorError>
    where
        T: GenerationSchema,
        G: StructuredGeneratorPort + ?Sized,
        F: Fn(&T) -> Result<(), GeneratorError>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut prompt = instruction.to_string();
        let mut attempt = 1;

        loop {
            tracing::debug!(stage, attempt, "Requesting {}: {}", T::SCHEMA_NAME, prompt);

            let request = GenerationRequest::new(T::SCHEMA_NAME, T::json_schema(), prompt)
                .with_temperature(self.temperature);

            let outcome = self
                .call(generator, request)
                .await
                .and_then(T::from_generated)
                .and_then(|value| check(&value).map(|_| value));

            match outcome {
                Ok(value) => return Ok(value),
                Err(GeneratorError::ContractViolation(reason)) if attempt < max_attempts => {
                    tracing::warn!(
                        stage,
                        attempt,
                        "Generation contract violated, retrying: {}",
                        reason
                    );
                    prompt = build_retry_prompt(instruction, &reason);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn call<G>(
        &self,
        generator: &G,
        request: GenerationRequest,
    ) -> Result<serde_json::Value, GeneratorError>
    where
        G: StructuredGeneratorPort + ?Sized,
    {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, generator.generate(request))
                .await
                .map_err(|_| {
                    GeneratorError::BackendUnavailable(format!(
                        "no response within {:?}",
                        limit
                    ))
                })?,
            None => generator.generate(request).await,
        }
    }
}
