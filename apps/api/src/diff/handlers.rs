//! Axum route handlers for the Diff API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::diff::{compute_word_diff, diff_bullets, find_best_match, BulletDiff, DiffSegment};
use crate::errors::AppError;
use crate::state::AppState;

/// Longest text accepted per bullet. Alignment is quadratic in token count.
pub const MAX_BULLET_CHARS: usize = 2_000;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DiffRequest {
    pub original: String,
    pub modified: String,
    #[serde(default)]
    pub used_keywords: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DiffResponse {
    pub segments: Vec<DiffSegment>,
}

#[derive(Debug, Deserialize)]
pub struct BestMatchRequest {
    pub modified: String,
    pub originals: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BestMatchResponse {
    pub best_match: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BulletsDiffRequest {
    /// Role whose stored bullets are the candidates. Ignored when `originals` is set.
    pub role_id: Option<String>,
    pub originals: Option<Vec<String>>,
    pub rewritten: Vec<String>,
    #[serde(default)]
    pub used_keywords: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BulletsDiffResponse {
    pub bullets: Vec<BulletDiff>,
}

fn check_length<'a>(field: &str, texts: impl IntoIterator<Item = &'a String>) -> Result<(), AppError> {
    match texts.into_iter().find(|t| t.chars().count() > MAX_BULLET_CHARS) {
        Some(_) => Err(AppError::Validation(format!(
            "{field} exceeds {MAX_BULLET_CHARS} characters"
        ))),
        None => Ok(()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/diff
///
/// Diffs one rewritten bullet against one original.
pub async fn handle_diff(Json(request): Json<DiffRequest>) -> Result<Json<DiffResponse>, AppError> {
    check_length("original", [&request.original])?;
    check_length("modified", [&request.modified])?;

    let segments = compute_word_diff(&request.original, &request.modified, &request.used_keywords);
    debug!("Diff produced {} segments", segments.len());

    Ok(Json(DiffResponse { segments }))
}

/// POST /api/v1/diff/best-match
///
/// Picks the original a rewritten bullet most likely came from.
pub async fn handle_best_match(
    Json(request): Json<BestMatchRequest>,
) -> Result<Json<BestMatchResponse>, AppError> {
    check_length("modified", [&request.modified])?;
    check_length("originals", &request.originals)?;

    let best_match = find_best_match(&request.modified, &request.originals).map(str::to_string);
    Ok(Json(BestMatchResponse { best_match }))
}

/// POST /api/v1/diff/bullets
///
/// Matches and diffs a list of rewritten bullets. Candidates come from the
/// request or from the stored bullets of `role_id`.
pub async fn handle_diff_bullets(
    State(state): State<AppState>,
    Json(request): Json<BulletsDiffRequest>,
) -> Result<Json<BulletsDiffResponse>, AppError> {
    check_length("rewritten", &request.rewritten)?;

    let originals = match (request.originals, request.role_id) {
        (Some(originals), _) => originals,
        (None, Some(role_id)) => state
            .library
            .experience
            .all_bullet_points
            .get(&role_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Role '{role_id}' not found")))?,
        (None, None) => {
            return Err(AppError::Validation(
                "either originals or role_id is required".to_string(),
            ))
        }
    };
    check_length("originals", &originals)?;

    let bullets = diff_bullets(&request.rewritten, &originals, &request.used_keywords);
    Ok(Json(BulletsDiffResponse { bullets }))
}
