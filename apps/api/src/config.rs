use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub resume_data_path: PathBuf,
    pub forbidden_terms_path: PathBuf,
    pub mock_provider_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            port: var("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
            resume_data_path: PathBuf::from(var("RESUME_DATA_PATH", "data/resume.json")),
            forbidden_terms_path: PathBuf::from(var(
                "FORBIDDEN_TERMS_PATH",
                "data/forbidden-terms.txt",
            )),
            mock_provider_delay_ms: var("MOCK_PROVIDER_DELAY_MS", "0")
                .parse::<u64>()
                .context("MOCK_PROVIDER_DELAY_MS must be a whole number of milliseconds")?,
        })
    }
}
