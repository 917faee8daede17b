//! Health routes

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Liveness check
pub async fn health_check() -> &'static str {
    "OK"
}

/// Check that the generation backend is reachable
pub async fn backend_health(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.generator.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "model": state.config.ollama_model,
            })),
        ),
        Err(e) => {
            tracing::warn!("Backend health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unavailable",
                    "message": e.to_string(),
                })),
            )
        }
    }
}
