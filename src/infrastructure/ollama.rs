//! Ollama client for structured generation
//!
//! Talks to Ollama's OpenAI-compatible chat completions endpoint and asks for
//! JSON-schema constrained output via `response_format`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{
    GenerationRequest, GeneratorError, StructuredGeneratorPort,
};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Ollama API
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Build a client; failure to set up the HTTP client means the backend is unavailable
    pub fn new(base_url: &str, model: &str) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| {
                GeneratorError::BackendUnavailable(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_body<'a>(&'a self, request: &'a GenerationRequest) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.instruction,
            }],
            stream: false,
            temperature: request.temperature,
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: &request.schema_name,
                    schema: &request.schema,
                    strict: true,
                },
            },
        }
    }
}

#[async_trait]
impl StructuredGeneratorPort for OllamaClient {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<serde_json::Value, GeneratorError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&self.build_body(&request))
            .send()
            .await
            .map_err(unavailable)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeneratorError::BackendUnavailable(format!(
                "Ollama returned {}: {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            GeneratorError::ContractViolation(format!("malformed completion: {}", e))
        })?;

        extract_structured_content(completion)
    }

    async fn health_check(&self) -> Result<(), GeneratorError> {
        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .send()
            .await
            .map_err(unavailable)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(GeneratorError::BackendUnavailable(format!(
                "Ollama health check returned {}",
                response.status()
            )))
        }
    }
}

fn unavailable(e: reqwest::Error) -> GeneratorError {
    GeneratorError::BackendUnavailable(format!("HTTP request failed: {}", e))
}

/// Pull the JSON document out of the first choice
fn extract_structured_content(
    completion: ChatCompletionResponse,
) -> Result<serde_json::Value, GeneratorError> {
    let content = completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            GeneratorError::ContractViolation("completion has no message content".to_string())
        })?;

    serde_json::from_str(strip_code_fence(&content)).map_err(|e| {
        GeneratorError::ContractViolation(format!("completion content is not JSON: {}", e))
    })
}

/// Some models wrap JSON in a markdown fence even in structured mode
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let rest = rest.strip_prefix("json").unwrap_or(rest);
            rest.strip_suffix("```").unwrap_or(rest).trim()
        }
        None => trimmed,
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    response_format: ResponseFormat<'a>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchemaFormat<'a>,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat<'a> {
    name: &'a str,
    schema: &'a serde_json::Value,
    strict: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}
