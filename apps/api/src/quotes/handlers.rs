use axum::Json;

use crate::quotes::{daily_quote, random_quote, Quote};

/// GET /quote
pub async fn handle_daily_quote() -> Json<Quote> {
    Json(*daily_quote())
}

/// GET /random
pub async fn handle_random_quote() -> Json<Quote> {
    Json(*random_quote())
}
