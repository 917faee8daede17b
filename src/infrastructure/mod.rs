//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Ollama: structured generation backend
//! - HTTP: tool routes, MCP endpoint and health checks
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod ollama;
pub mod state;
