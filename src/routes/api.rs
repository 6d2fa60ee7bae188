use crate::{handlers::health_check, state::AppState};
use axum::{routing::get, Router};

/// Create API routes, mounted under `/api`
pub fn create_api_routes() -> Router<AppState> {
    Router::<AppState>::new()
        .route("/health", get(health_check))
}
