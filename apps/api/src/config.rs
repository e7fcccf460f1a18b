#![allow(dead_code)]

use anyhow::{Context, Result};

use crate::encyclopedia::wikipedia;
use crate::llm_client;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub secret_key: String,
    pub cloudflare_account_id: String,
    pub cloudflare_api_token: String,
    pub workers_ai_base_url: String,
    pub wikipedia_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            secret_key: require_env("SECRET_KEY")?,
            cloudflare_account_id: require_env("CLOUDFLARE_ACCOUNT_ID")?,
            cloudflare_api_token: require_env("CLOUDFLARE_API_TOKEN")?,
            workers_ai_base_url: env_or("WORKERS_AI_BASE_URL", llm_client::DEFAULT_BASE_URL),
            wikipedia_base_url: env_or("WIKIPEDIA_BASE_URL", wikipedia::DEFAULT_BASE_URL),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
