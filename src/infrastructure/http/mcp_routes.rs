//! MCP endpoint - JSON-RPC 2.0 access to the monster tools
//!
//! Supports `initialize`, `ping`, `tools/list` and `tools/call`. Notifications
//! are acknowledged with `202 Accepted` and no body.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::dto::mcp::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, JSONRPC_VERSION, MCP_PROTOCOL_VERSION,
    METHOD_NOT_FOUND, PARSE_ERROR,
};
use crate::application::dto::{JsonRpcRequest, JsonRpcResponse, ToolCallParams};
use crate::application::services::MonsterTool;
use crate::infrastructure::state::AppState;

pub const SERVER_NAME: &str = "monster_game";

/// Handle one JSON-RPC message
pub async fn handle_mcp(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request: JsonRpcRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            return Json(JsonRpcResponse::error(
                serde_json::Value::Null,
                PARSE_ERROR,
                format!("Parse error: {}", e),
            ))
            .into_response()
        }
    };

    if request.is_notification() {
        tracing::debug!("MCP notification: {}", request.method);
        return StatusCode::ACCEPTED.into_response();
    }

    tracing::debug!("MCP request: {}", request.method);
    let id = request.id.clone().unwrap_or(serde_json::Value::Null);
    if request.jsonrpc != JSONRPC_VERSION {
        return Json(JsonRpcResponse::error(
            id,
            INVALID_REQUEST,
            format!("Unsupported jsonrpc version '{}'", request.jsonrpc),
        ))
        .into_response();
    }

    let response = match request.method.as_str() {
        "initialize" => JsonRpcResponse::result(id, initialize_result()),
        "ping" => JsonRpcResponse::result(id, serde_json::json!({})),
        "tools/list" => JsonRpcResponse::result(
            id,
            serde_json::json!({ "tools": state.monster_tools.definitions() }),
        ),
        "tools/call" => call_tool(&state, id, request.params).await,
        other => JsonRpcResponse::error(id, METHOD_NOT_FOUND, format!("Method not found: {}", other)),
    };

    Json(response).into_response()
}

fn initialize_result() -> serde_json::Value {
    serde_json::json!({
        "protocolVersion": MCP_PROTOCOL_VERSION,
        "capabilities": { "tools": {} },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
    })
}

async fn call_tool(
    state: &AppState,
    id: serde_json::Value,
    params: serde_json::Value,
) -> JsonRpcResponse {
    let params: ToolCallParams = match serde_json::from_value(params) {
        Ok(params) => params,
        Err(e) => return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {}", e)),
    };

    let tool = match params.name.parse::<MonsterTool>() {
        Ok(tool) => tool,
        Err(message) => return JsonRpcResponse::error(id, INVALID_PARAMS, message),
    };

    let envelope = state.monster_tools.call(tool, params.arguments).await;
    let structured = match serde_json::to_value(&envelope) {
        Ok(value) => value,
        Err(e) => {
            return JsonRpcResponse::error(id, INTERNAL_ERROR, format!("Unserializable result: {}", e))
        }
    };

    JsonRpcResponse::result(
        id,
        serde_json::json!({
            "content": [{ "type": "text", "text": structured.to_string() }],
            "structuredContent": structured,
            "isError": !envelope.success,
        }),
    )
}
