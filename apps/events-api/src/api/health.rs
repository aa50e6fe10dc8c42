//! Readiness endpoint

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{AppError, ReadyResponse};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Pings MongoDB; 503 when the ping fails.
async fn readiness_check(State(state): State<AppState>) -> Result<Json<ReadyResponse>, AppError> {
    let health =
        database::mongodb::check_health(&state.mongo_client, state.config.mongodb.database())
            .await;

    if !health.healthy {
        return Err(AppError::ServiceUnavailable(
            health
                .message
                .unwrap_or_else(|| "MongoDB is not reachable".to_string()),
        ));
    }

    Ok(Json(ReadyResponse {
        status: "ready",
        database: "connected",
        latency_ms: health.response_time.as_millis() as u64,
    }))
}
