//! HTTP routes

mod health_routes;
mod mcp_routes;
mod tool_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Health
        .route("/health", get(health_routes::health_check))
        .route("/health/backend", get(health_routes::backend_health))
        // Tools over plain HTTP
        .route("/api/tools", get(tool_routes::list_tools))
        .route("/api/tools/{name}", post(tool_routes::call_tool))
        // Tools over MCP
        .route("/mcp", post(mcp_routes::handle_mcp))
}
