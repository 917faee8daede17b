//! Application configuration

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::services::llm::GenerationPolicy;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Ollama API base URL (OpenAI-compatible)
    pub ollama_base_url: String,
    /// Model used for every generation request
    pub ollama_model: String,

    /// Address the HTTP server binds to
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,

    /// Deadline for a single generator call, in seconds (0 disables it)
    pub generation_timeout_secs: u64,
    /// Attempts per generation stage
    pub generation_max_attempts: u32,
    /// Optional sampling temperature
    pub generation_temperature: Option<f32>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup, falling back to defaults for missing keys
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            ollama_base_url: var("OLLAMA_BASE_URL", "http://localhost:11434/v1"),
            ollama_model: var("OLLAMA_MODEL", "gemma3:4b"),

            server_host: var("SERVER_HOST", "0.0.0.0"),
            server_port: var("PORT", "8000")
                .parse()
                .context("PORT must be a valid port number")?,

            // No deadline unless one is configured
            generation_timeout_secs: var("GENERATION_TIMEOUT_SECS", "0")
                .parse()
                .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")?,
            generation_max_attempts: var("GENERATION_MAX_ATTEMPTS", "1")
                .parse()
                .context("GENERATION_MAX_ATTEMPTS must be a positive integer")?,
            generation_temperature: lookup("GENERATION_TEMPERATURE")
                .map(|value| value.parse::<f32>())
                .transpose()
                .context("GENERATION_TEMPERATURE must be a number")?,
        })
    }

    /// Deadline for one generator call, if any
    pub fn generation_timeout(&self) -> Option<Duration> {
        (self.generation_timeout_secs > 0).then(|| Duration::from_secs(self.generation_timeout_secs))
    }

    /// Per-stage generation policy derived from this configuration
    pub fn generation_policy(&self) -> GenerationPolicy {
        GenerationPolicy::default()
            .with_max_attempts(self.generation_max_attempts.max(1))
            .with_timeout(self.generation_timeout())
            .with_temperature(self.generation_temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            ollama_base_url: "http://localhost:11434/v1".to_string(),
            ollama_model: "gemma3:4b".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 8000,
            generation_timeout_secs: 0,
            generation_max_attempts: 0,
            generation_temperature: Some(0.5),
        }
    }

    #[test]
    fn test_zero_timeout_disables_deadline() {
        assert_eq!(config().generation_timeout(), None);

        let mut with_deadline = config();
        with_deadline.generation_timeout_secs = 30;
        assert_eq!(
            with_deadline.generation_timeout(),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_defaults_apply_no_deadline_and_one_attempt() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.ollama_base_url, "http://localhost:11434/v1");
        assert_eq!(config.ollama_model, "gemma3:4b");
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.generation_timeout(), None);

        let policy = config.generation_policy();
        assert_eq!(policy.max_attempts, 1);
        assert_eq!(policy.timeout, None);
        assert_eq!(policy.temperature, None);
    }

    #[test]
    fn test_overrides_and_bad_values() {
        let config = AppConfig::from_lookup(|key| match key {
            "GENERATION_TIMEOUT_SECS" => Some("45".to_string()),
            "GENERATION_TEMPERATURE" => Some("0.2".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.generation_timeout(), Some(Duration::from_secs(45)));
        assert_eq!(config.generation_temperature, Some(0.2));

        let bad_port = AppConfig::from_lookup(|key| (key == "PORT").then(|| "http".to_string()));
        assert!(bad_port.is_err());
    }

    #[test]
    fn test_policy_always_allows_one_attempt() {
        let policy = config().generation_policy();
        assert_eq!(policy.max_attempts, 1);
        assert_eq!(policy.temperature, Some(0.5));
        assert_eq!(policy.timeout, None);
    }
}
