use axum::{extract::State, Json};
use crate::{models::HealthResponse, state::AppState};
use tracing::debug;

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.service_name().to_string(),
    })
}
