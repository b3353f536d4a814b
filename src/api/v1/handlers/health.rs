/*
 * Responsibility
 * - GET /health (infrastructure health check, bypasses the RPC surface)
 * - Healthz RPC
 */
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::{proto::comment::HealthzResponse, state::AppState};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

// The request message has no fields, so the body is not read at all.
pub async fn healthz(State(state): State<AppState>) -> Json<HealthzResponse> {
    Json(state.comments.healthz(Default::default()).await)
}
