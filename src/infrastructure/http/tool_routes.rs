//! Tool API routes - plain HTTP access to the monster tools

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{ToolDefinition, ToolResponse};
use crate::application::services::MonsterTool;
use crate::infrastructure::state::AppState;

/// List the available tools
pub async fn list_tools(State(state): State<Arc<AppState>>) -> Json<Vec<ToolDefinition>> {
    Json(state.monster_tools.definitions())
}

/// Call a tool by name with a JSON arguments object (an empty body means no arguments)
///
/// Every call to a known tool answers 200 with the response envelope.
pub async fn call_tool(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: Bytes,
) -> (StatusCode, Json<ToolResponse>) {
    let tool = match name.parse::<MonsterTool>() {
        Ok(tool) => tool,
        Err(message) => return (StatusCode::NOT_FOUND, Json(ToolResponse::failure(message))),
    };

    let arguments = if body.is_empty() {
        serde_json::Value::Null
    } else {
        match serde_json::from_slice(&body) {
            Ok(arguments) => arguments,
            Err(e) => {
                return (
                    StatusCode::OK,
                    Json(ToolResponse::failure(format!("Invalid JSON body: {}", e))),
                )
            }
        }
    };

    let response = state.monster_tools.call(tool, arguments).await;
    (StatusCode::OK, Json(response))
}
