use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::AiProvider;
use crate::models::resume::ResumeLibrary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable completion backend. Default: MockProvider.
    pub provider: Arc<dyn AiProvider>,
    /// Base resume and bullet pool, loaded once at startup.
    pub library: Arc<ResumeLibrary>,
    /// Lowercased terms that must never appear in generated bullets.
    pub forbidden_terms: Arc<Vec<String>>,
}
