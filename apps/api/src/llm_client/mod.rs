/// LLM Client: the single point of entry for hosted text generation.
///
/// ARCHITECTURAL RULE: No other module may call Workers AI directly.
/// Handlers depend on the `TextGenerator` trait; `WorkersAiClient` is the
/// production implementation.
///
/// Model: @cf/meta/llama-3-8b-instruct (hardcoded, not configurable)
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";
/// The model used for every generation call.
pub const MODEL: &str = "@cf/meta/llama-3-8b-instruct";
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Anything that can turn a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct RunRequest<'a> {
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct RunEnvelope {
    #[serde(default)]
    success: bool,
    result: Option<RunResult>,
    #[serde(default)]
    errors: Vec<ApiMessage>,
}

#[derive(Debug, Deserialize)]
struct RunResult {
    response: Option<String>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

impl RunEnvelope {
    fn error_message(&self) -> String {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        if messages.is_empty() {
            "unknown error".to_string()
        } else {
            messages.join("; ")
        }
    }
}

/// Cloudflare Workers AI over REST. One call per prompt, no retries, no streaming.
#[derive(Clone)]
pub struct WorkersAiClient {
    client: Client,
    run_url: String,
    api_token: String,
}

impl WorkersAiClient {
    pub fn new(base_url: &str, account_id: &str, api_token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .context("Failed to build Workers AI HTTP client")?;

        Ok(Self {
            client,
            run_url: format!(
                "{}/accounts/{account_id}/ai/run/{MODEL}",
                base_url.trim_end_matches('/')
            ),
            api_token,
        })
    }
}

#[async_trait]
impl TextGenerator for WorkersAiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = RunRequest {
            prompt,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.run_url)
            .bearer_auth(&self.api_token)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let envelope = match serde_json::from_str::<RunEnvelope>(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                warn!("Workers AI returned {}: {}", status, body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }
            Err(e) => return Err(LlmError::Parse(e)),
        };

        if !status.is_success() || !envelope.success {
            let message = envelope.error_message();
            warn!("Workers AI returned {}: {}", status, message);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let result = envelope.result.ok_or(LlmError::EmptyContent)?;

        if let Some(usage) = &result.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        result.response.ok_or(LlmError::EmptyContent)
    }
}
