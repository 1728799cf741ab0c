use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Service metadata for discovery and smoke checks.
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "service": "notification",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
