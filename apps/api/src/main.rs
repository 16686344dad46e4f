use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tailor::assertions::load_forbidden_terms;
use tailor::config::Config;
use tailor::llm_client::MockProvider;
use tailor::models::resume::ResumeLibrary;
use tailor::routes::build_router;
use tailor::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tailor API v{}", env!("CARGO_PKG_VERSION"));

    let library = ResumeLibrary::load(&config.resume_data_path)?;
    info!(
        "Resume data loaded: {} roles, {} skills",
        library.role_ids().len(),
        library.experience.all_skills.len()
    );

    let forbidden_terms = load_forbidden_terms(&config.forbidden_terms_path)?;
    info!("Forbidden terms loaded: {}", forbidden_terms.len());

    // Only the mock backend ships; real providers implement AiProvider.
    let provider =
        MockProvider::default().with_delay(Duration::from_millis(config.mock_provider_delay_ms));
    info!("AI provider initialized (mock, delay {}ms)", config.mock_provider_delay_ms);

    let state = AppState {
        config: config.clone(),
        provider: Arc::new(provider),
        library: Arc::new(library),
        forbidden_terms: Arc::new(forbidden_terms),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
