//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP/MCP) can
//! serialize/deserialize request and response envelopes in one place.

pub mod mcp;
pub mod tool;

pub use mcp::{JsonRpcRequest, JsonRpcResponse, ToolCallParams};
pub use tool::{MonsterPairArgs, ToolDefinition, ToolResponse};
