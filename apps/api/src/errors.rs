use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::encyclopedia::LookupError;
use crate::llm_client::LlmError;

/// Generic message returned for every 5xx; the real cause only goes to the log.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while processing your request";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Body shape is always `{ "error": <message>, "code": <stable code> }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Generation error: {0}")]
    Generation(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable, machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Lookup(_) => "LOOKUP_ERROR",
            AppError::Generation(_) => "GENERATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Lookup(LookupError::PageNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Lookup(_) => StatusCode::BAD_GATEWAY,
            AppError::Generation(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Lookup(e) => {
                tracing::warn!("Encyclopedia lookup failed: {e}");
                e.to_string()
            }
            AppError::Generation(e) => {
                tracing::error!("Error processing request: {e}");
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        };

        let body = Json(json!({
            "error": message,
            "code": self.code(),
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_keeps_message() {
        let (status, body) = body_json(AppError::Validation("bad input".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad input");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_lookup_not_found_maps_to_404() {
        let error = AppError::from(LookupError::PageNotFound("Nope".into()));
        let (status, body) = body_json(error).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "LOOKUP_ERROR");
        assert_eq!(
            body["error"],
            LookupError::PageNotFound("Nope".into()).to_string()
        );
    }

    #[tokio::test]
    async fn test_other_lookup_errors_map_to_bad_gateway() {
        let error = AppError::from(LookupError::MissingImage("Rust".into()));
        let (status, _) = body_json(error).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_generation_error_hides_detail() {
        let error = AppError::from(LlmError::Api {
            status: 401,
            message: "secret token rejected".into(),
        });
        let (status, body) = body_json(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], GENERIC_FAILURE_MESSAGE);
        assert_eq!(body["code"], "GENERATION_ERROR");
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let error = AppError::from(anyhow::anyhow!("disk on fire"));
        let (status, body) = body_json(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], GENERIC_FAILURE_MESSAGE);
    }
}
