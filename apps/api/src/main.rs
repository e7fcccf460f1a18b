mod config;
mod cover_letter;
mod encyclopedia;
mod errors;
mod llm_client;
mod quotes;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::encyclopedia::WikipediaClient;
use crate::llm_client::WorkersAiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Daily Quote API v{}", env!("CARGO_PKG_VERSION"));
    info!("Quote catalog loaded ({} quotes)", quotes::CATALOG.len());

    // Initialize encyclopedia client
    let encyclopedia = WikipediaClient::new(&config.wikipedia_base_url)?;
    info!("Wikipedia client initialized ({})", config.wikipedia_base_url);

    // Initialize text generation client
    let generator = WorkersAiClient::new(
        &config.workers_ai_base_url,
        &config.cloudflare_account_id,
        config.cloudflare_api_token.clone(),
    )?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        encyclopedia: Arc::new(encyclopedia),
        generator: Arc::new(generator),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
