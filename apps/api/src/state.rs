use std::sync::Arc;

use crate::encyclopedia::SummaryLookup;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Encyclopedia backend. Default: WikipediaClient.
    pub encyclopedia: Arc<dyn SummaryLookup>,
    /// Text generation backend. Default: WorkersAiClient.
    pub generator: Arc<dyn TextGenerator>,
}
