mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::{Context, Result};
use reqwest::Client;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::csv_fetcher::CsvFetcher;
use crate::analysis::framework::FrameworkText;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting beslutsanalys v{}", env!("CARGO_PKG_VERSION"));

    let framework = FrameworkText::load(config.framework_path.as_deref())?;

    // One HTTP client shared by the CSV fetcher and the Gemini client
    let http = Client::builder()
        .user_agent(concat!("beslutsanalys/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let llm = GeminiClient::new(
        http.clone(),
        &config.gemini_base_url,
        config.gemini_api_key.clone(),
        config.model.clone(),
    );
    info!(
        "LLM client initialized (model: {}, max_output_tokens: {}, temperature: {})",
        config.model.model, config.model.max_output_tokens, config.model.temperature
    );

    let state = AppState {
        csv: CsvFetcher::new(http),
        llm,
        framework,
    };

    let app = build_router(state, &config.static_dir, &config.index_file);
    info!("Serving static files from {}", config.static_dir.display());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
