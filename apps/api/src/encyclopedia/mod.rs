//! Encyclopedia lookup: turns a search term into a short summary plus a lead image.
//!
//! Handlers only see the `SummaryLookup` trait. `WikipediaClient` is the
//! production backend; tests swap in doubles through `AppState`.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub mod handlers;
pub mod wikipedia;

pub use wikipedia::WikipediaClient;

/// Summary returned to the client as `{ "intro": ..., "image": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncyclopediaSummary {
    #[serde(rename = "intro")]
    pub extract: String,
    #[serde(rename = "image")]
    pub image_url: String,
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("No page with given title exists: {0}")]
    PageNotFound(String),

    #[error("\"{0}\" refers to a disambiguation page")]
    Disambiguation(String),

    #[error("No image available for page: {0}")]
    MissingImage(String),

    #[error("Encyclopedia API error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A summary-lookup backend, keyed by free-text search term.
#[async_trait]
pub trait SummaryLookup: Send + Sync {
    async fn lookup(&self, term: &str) -> Result<EncyclopediaSummary, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_with_wire_names() {
        let summary = EncyclopediaSummary {
            extract: "Rust is a language.".to_string(),
            image_url: "https://upload.example/rust.png".to_string(),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["intro"], "Rust is a language.");
        assert_eq!(value["image"], "https://upload.example/rust.png");
        assert!(value.get("extract").is_none());
    }
}
