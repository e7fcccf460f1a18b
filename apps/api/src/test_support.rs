//! Test doubles for the external collaborators behind `AppState`.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;

use crate::encyclopedia::{EncyclopediaSummary, LookupError, SummaryLookup};
use crate::llm_client::{LlmError, TextGenerator};
use crate::state::AppState;

/// Generator double that returns a canned reply (or fails) and records every prompt.
#[derive(Default)]
pub struct RecordingGenerator {
    reply: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl RecordingGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "model overloaded: internal trace id abc123".to_string(),
        })
    }
}

/// Lookup double with a fixed outcome and a call counter.
pub struct StubLookup {
    outcome: Result<EncyclopediaSummary, fn(&str) -> LookupError>,
    calls: AtomicUsize,
}

impl StubLookup {
    pub fn found(extract: &str, image_url: &str) -> Self {
        Self {
            outcome: Ok(EncyclopediaSummary {
                extract: extract.to_string(),
                image_url: image_url.to_string(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(make_error: fn(&str) -> LookupError) -> Self {
        Self {
            outcome: Err(make_error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SummaryLookup for StubLookup {
    async fn lookup(&self, term: &str) -> Result<EncyclopediaSummary, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(summary) => Ok(summary.clone()),
            Err(make_error) => Err(make_error(term)),
        }
    }
}

pub fn test_state(lookup: Arc<StubLookup>, generator: Arc<RecordingGenerator>) -> AppState {
    AppState {
        encyclopedia: lookup,
        generator,
    }
}
