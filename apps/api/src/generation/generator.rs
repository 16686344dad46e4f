//! Resume Generation: orchestrates one customization run.
//!
//! Flow: build prompt → provider completion → parse structured answer →
//!       resolve company name → diff every rewritten bullet against its
//!       role's originals.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::diff::{diff_roles, BulletDiff};
use crate::errors::AppError;
use crate::generation::prompts::{build_resume_prompt, extract_company_name};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{AiProvider, CompletionRequest, Usage};
use crate::models::resume::{ResumeContent, ResumeLibrary};

/// Request body for resume generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub job_description: String,
}

/// A generated resume with every bullet diffed against its source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub generation_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub provider: String,
    pub company_name: String,
    pub technical_skills: Vec<String>,
    pub used_keywords: Vec<String>,
    /// Role id → diffed bullets.
    pub bullets: BTreeMap<String, Vec<BulletDiff>>,
    pub usage: Option<Usage>,
}

/// Uses the AI-reported company name unless it is missing or blank.
pub fn resolve_company_name(content: &ResumeContent, job_description: &str) -> String {
    content
        .company_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| extract_company_name(job_description))
}

/// Runs one generation for `job_description`.
pub async fn generate_resume(
    provider: &dyn AiProvider,
    library: &ResumeLibrary,
    job_description: &str,
) -> Result<GenerateResponse, AppError> {
    let prompt = build_resume_prompt(job_description, &library.resume, &library.experience);
    info!(
        "Requesting resume customization from '{}' ({} prompt chars)",
        provider.name(),
        prompt.len()
    );

    let response = provider
        .complete(CompletionRequest::new(prompt).with_system(JSON_ONLY_SYSTEM))
        .await?;

    let content: ResumeContent = response.json().map_err(|e| {
        warn!("Provider '{}' returned unusable output: {e}", provider.name());
        AppError::UnprocessableEntity("AI response did not contain valid resume JSON".to_string())
    })?;

    let company_name = resolve_company_name(&content, job_description);

    let unknown_roles: Vec<&String> = content
        .bullets
        .keys()
        .filter(|role| !library.experience.all_bullet_points.contains_key(*role))
        .collect();
    if !unknown_roles.is_empty() {
        warn!("AI response contains unknown roles: {unknown_roles:?}");
    }

    let bullets = diff_roles(
        &library.experience.all_bullet_points,
        &content.bullets,
        &content.used_keywords,
    );

    info!(
        "Generated resume for {company_name}: {} roles, {} keywords",
        bullets.len(),
        content.used_keywords.len()
    );

    Ok(GenerateResponse {
        generation_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        provider: provider.name().to_string(),
        company_name,
        technical_skills: content.technical_skills,
        used_keywords: content.used_keywords,
        bullets,
        usage: response.usage,
    })
}
