use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Static welcome payload listing the public quote endpoints.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Daily Quote API",
        "endpoints": {
            "/quote": "Get the quote of the day",
            "/random": "Get a random quote"
        }
    }))
}
