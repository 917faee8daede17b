//! Scripted generator for service and route tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{GenerationRequest, GeneratorError, StructuredGeneratorPort};

/// Replays canned responses in order and records every request it receives
#[derive(Default)]
pub struct ScriptedGenerator {
    responses: Mutex<VecDeque<Result<serde_json::Value, GeneratorError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_ok(self, value: serde_json::Value) -> Self {
        self.push(Ok(value))
    }

    pub fn then_err(self, error: GeneratorError) -> Self {
        self.push(Err(error))
    }

    fn push(self, response: Result<serde_json::Value, GeneratorError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl StructuredGeneratorPort for ScriptedGenerator {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<serde_json::Value, GeneratorError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(GeneratorError::BackendUnavailable(
                    "script exhausted".to_string(),
                ))
            })
    }

    async fn health_check(&self) -> Result<(), GeneratorError> {
        Ok(())
    }
}

/// A valid monster draft as the backend would return it
pub fn draft_json(name: &str, description: &str, ability: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "description": description,
        "stats": {
            "health": 55, "defense": 45, "strength": 60, "intelligence": 40,
            "speed": 70, "magic": 35, "stealth": 65, "luck": 50, "charm": 30
        },
        "ability": ability
    })
}
