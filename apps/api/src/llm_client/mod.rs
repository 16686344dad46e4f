/// LLM Client: the seam between the generation pipeline and a text-completion backend.
///
/// Backends implement `AiProvider`; the pipeline only ever sees the trait object
/// held in `AppState`. The bundled backend is `MockProvider`.
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod mock;
pub mod prompts;

pub use mock::MockProvider;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub system: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub content: String,
    pub usage: Option<Usage>,
}

impl CompletionResponse {
    /// Deserializes the completion text as JSON, tolerating code fences and
    /// prose around the object.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, LlmError> {
        if self.content.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }
        match extract_json(&self.content) {
            Some(value) => Ok(value),
            // Re-parse to surface the underlying error
            None => serde_json::from_str(strip_json_fences(&self.content)).map_err(LlmError::Parse),
        }
    }
}

/// A text-completion backend.
#[async_trait::async_trait]
pub trait AiProvider: Send + Sync {
    /// Short backend label for logs and responses.
    fn name(&self) -> &'static str;

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}

/// Parses `output` as JSON: first as a whole, then with code fences stripped,
/// then the span from the first `{` to the last `}`.
pub fn extract_json<T: DeserializeOwned>(output: &str) -> Option<T> {
    if let Ok(value) = serde_json::from_str(output) {
        return Some(value);
    }
    if let Ok(value) = serde_json::from_str(strip_json_fences(output)) {
        return Some(value);
    }
    let start = output.find('{')?;
    let end = output.rfind('}')?;
    if end < start {
        return None;
    }
    match serde_json::from_str(&output[start..=end]) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("No parseable JSON object in output: {e}");
            None
        }
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(stripped)
        }
        None => text,
    }
}

/// Rough token estimate: one token per four characters, rounded up.
pub fn estimate_tokens(text: &str) -> u32 {
    let chars = text.chars().count() as u32;
    chars.div_ceil(4)
}
