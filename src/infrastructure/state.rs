//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::outbound::StructuredGeneratorPort;
use crate::application::services::MonsterToolService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::ollama::OllamaClient;

/// Shared application state
///
/// Holds no per-request data: every tool call builds its own entities and
/// only borrows the generator handle.
pub struct AppState {
    pub config: AppConfig,
    pub generator: Arc<dyn StructuredGeneratorPort>,
    pub monster_tools: MonsterToolService<dyn StructuredGeneratorPort>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        // Initialize Ollama client
        let llm_client = OllamaClient::new(&config.ollama_base_url, &config.ollama_model)?;
        tracing::info!("Using model {}", llm_client.model());

        Ok(Self::with_generator(config, Arc::new(llm_client)))
    }

    /// Build state around an already constructed generator
    pub fn with_generator(config: AppConfig, generator: Arc<dyn StructuredGeneratorPort>) -> Self {
        let monster_tools = MonsterToolService::new(generator.clone(), config.generation_policy());

        Self {
            config,
            generator,
            monster_tools,
        }
    }
}
