mod catalog;
mod config;
mod convert;
mod document;
mod errors;
mod finance;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::TemplateCatalog;
use crate::config::Config;
use crate::convert::{DocumentConverter, SofficeConverter};
use crate::llm_client::{GeminiClient, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{crate_target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting DPR Architect API v{}", env!("CARGO_PKG_VERSION"));

    // Artifact root; per-request subdirectories are created by the pipeline.
    std::fs::create_dir_all(&config.output_dir)?;

    // Text-generation capability. Absence of the credential is the
    // supported degraded mode, not a startup failure.
    let llm: Option<Arc<dyn TextGenerator>> = match &config.gemini_api_key {
        Some(key) => {
            let client = GeminiClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(client))
        }
        None => {
            warn!("GEMINI_API_KEY not set; using placeholder content and default classification");
            None
        }
    };

    let converter: Arc<dyn DocumentConverter> =
        Arc::new(SofficeConverter::new(config.soffice_path.clone()));

    let catalog = Arc::new(TemplateCatalog::builtin());

    let state = AppState {
        llm,
        converter,
        catalog,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
