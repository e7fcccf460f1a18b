use axum::{
    extract::{Path, State},
    Json,
};

use crate::encyclopedia::EncyclopediaSummary;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /get-suggestion/:search
///
/// Looks the term up in the encyclopedia and returns its intro and lead image.
/// A blank term is rejected before any outbound call is made.
pub async fn handle_get_suggestion(
    State(state): State<AppState>,
    Path(search): Path<String>,
) -> Result<Json<EncyclopediaSummary>, AppError> {
    let term = search.trim();
    if term.is_empty() {
        return Err(AppError::Validation(
            "search term cannot be empty".to_string(),
        ));
    }

    let summary = state.encyclopedia.lookup(term).await?;

    Ok(Json(summary))
}
