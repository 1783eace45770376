use anyhow::{Context, Result};

pub mod ai;
mod api;
mod config;
mod suggestions;
mod system_info;
pub mod tips;
mod text_utils;
mod usage;


pub use api::{router as api_router, AppState, HealthResponse, StatusMessage, SuggestionsResponse};
pub use config::{Config, DEFAULT_BIND_ADDR};
pub use suggestions::generate_suggestions;
pub use system_info::get_system_info;
pub use text_utils::{clean_candidate, strip_enumeration};
pub use tips::{extract_tips, format_tips, TipList, FALLBACK_TIPS, TIP_COUNT};
pub use usage::{UsageError, UsageFigure, UsageInput};

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Load .env file if it exists (for local development)
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!(build = %get_system_info(), "Starting tips server...");

    let config = Config::from_env()?;
    tracing::info!(
        backend = config.generator.backend.name(),
        model = config.generator.backend.model(),
        "Using generation backend"
    );

    // The generator lives for the whole process and is shared by every request.
    let state = AppState {
        generator: config.generator.build_generator(),
        params: config.generator.params,
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "Server listening");

    axum::serve(listener, api_router(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
