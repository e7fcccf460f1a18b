// Cover letter generation: request validation, prompt templating and one
// call to the hosted text generator. All model calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const RESULT_TYPE: &str = "Cover Letter Generation";
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields in request body";

/// Request body for POST /ai. Every field is required; `Option` lets
/// missing and `null` values reach validation instead of failing to parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverLetterRequest {
    pub company: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
    pub cv: Option<String>,
}

/// Validated view over a `CoverLetterRequest`: all four fields present and non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverLetterFields<'a> {
    pub company: &'a str,
    pub position: &'a str,
    pub description: &'a str,
    pub cv: &'a str,
}

impl CoverLetterRequest {
    pub fn validate(&self) -> Result<CoverLetterFields<'_>, AppError> {
        fn required(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }

        match (
            required(&self.company),
            required(&self.position),
            required(&self.description),
            required(&self.cv),
        ) {
            (Some(company), Some(position), Some(description), Some(cv)) => {
                Ok(CoverLetterFields {
                    company,
                    position,
                    description,
                    cv,
                })
            }
            _ => Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

/// Response body for a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResult {
    #[serde(rename = "type")]
    pub result_type: &'static str,
    pub cover_letter: String,
}

impl CoverLetterResult {
    pub fn new(cover_letter: String) -> Self {
        Self {
            result_type: RESULT_TYPE,
            cover_letter,
        }
    }
}
