//! Liveness endpoint backed by a database round trip.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;

use crate::api::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// 200 `healthy` when `SELECT 1` succeeds, 503 `degraded` otherwise.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.database.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                database: "up",
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    database: "down",
                }),
            )
        }
    }
}
