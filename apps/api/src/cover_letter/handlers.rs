use axum::{body::Bytes, extract::State, Json};

use crate::cover_letter::generator::generate_cover_letter;
use crate::cover_letter::{CoverLetterRequest, CoverLetterResult};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /ai
///
/// Body: `{ company, position, description, cv }`. The body is parsed as JSON
/// whatever its Content-Type; malformed JSON is a 400.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CoverLetterResult>, AppError> {
    let request: CoverLetterRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))?;

    let result = generate_cover_letter(&request, state.generator.as_ref()).await?;

    Ok(Json(result))
}
