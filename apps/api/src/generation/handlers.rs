//! Axum route handlers for the Resume API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::generator::{generate_resume, GenerateRequest, GenerateResponse};
use crate::generation::prompts::{build_resume_prompt, extract_company_name};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PromptResponse {
    pub prompt: String,
    pub company_name: String,
}

fn require_job_description(job_description: &str) -> Result<(), AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/prompt
///
/// Returns the customization prompt that would be sent for a job description.
/// Useful for previewing before generating.
pub async fn handle_build_prompt(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> Result<Json<PromptResponse>, AppError> {
    require_job_description(&request.job_description)?;

    let prompt = build_resume_prompt(
        &request.job_description,
        &state.library.resume,
        &state.library.experience,
    );
    let company_name = extract_company_name(&request.job_description);

    Ok(Json(PromptResponse {
        prompt,
        company_name,
    }))
}

/// POST /api/v1/resumes/generate
///
/// Full pipeline: prompt → completion → parse → bullet diffs.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    require_job_description(&request.job_description)?;

    let response = generate_resume(
        state.provider.as_ref(),
        &state.library,
        &request.job_description,
    )
    .await?;

    Ok(Json(response))
}
