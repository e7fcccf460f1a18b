pub mod health;
pub mod index;

use axum::{
    routing::{get, post},
    Router,
};

use crate::cover_letter::handlers::handle_generate_cover_letter;
use crate::encyclopedia::handlers::handle_get_suggestion;
use crate::errors::AppError;
use crate::quotes::handlers::{handle_daily_quote, handle_random_quote};
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No route matches this path".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        // Quotes
        .route("/quote", get(handle_daily_quote))
        .route("/random", get(handle_random_quote))
        // External lookups
        .route("/get-suggestion/:search", get(handle_get_suggestion))
        .route("/ai", post(handle_generate_cover_letter))
        .fallback(not_found)
        .with_state(state)
}
