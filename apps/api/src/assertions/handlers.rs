//! Axum route handlers for the Assertions API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::assertions::{evaluate_all, AssertionReport};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    /// Raw completion text, prose and code fences allowed.
    pub output: String,
    #[serde(default)]
    pub job_description: String,
}

/// POST /api/v1/assertions/evaluate
///
/// Runs every output check against a raw completion. Resume skills and the
/// forbidden-terms list come from the loaded data files.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<AssertionReport>, AppError> {
    if request.output.trim().is_empty() {
        return Err(AppError::Validation("output cannot be empty".to_string()));
    }

    let resume_terms = state.library.resume.skill_terms();
    let report = evaluate_all(
        &request.output,
        &request.job_description,
        &resume_terms,
        &state.forbidden_terms,
    );

    info!(
        "Assertions evaluated: passed={} failed={}",
        report.passed,
        report.results.iter().filter(|r| !r.result.pass).count()
    );

    Ok(Json(report))
}
