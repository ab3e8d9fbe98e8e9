pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::composer::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found() -> Result<(), AppError> {
    Err(AppError::NotFound("No such route".to_string()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Prompt API
        .route("/api/v1/prompts/options", get(handlers::handle_options))
        .route("/api/v1/prompts/compose", post(handlers::handle_compose))
        .route("/api/v1/prompts/generate", post(handlers::handle_generate))
        .fallback(not_found)
        .with_state(state)
}
