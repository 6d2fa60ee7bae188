use axum::{extract::State, Json};
use crate::{models::RootResponse, state::AppState};
use tracing::debug;

/// Root greeting endpoint
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    debug!("Root greeting requested");
    Json(RootResponse {
        message: format!("{} is running", state.service_name()),
    })
}
