use crate::assertions::{AssertionResult, INVALID_JSON_REASON};
use crate::diff::matches_word_boundary;
use crate::llm_client::extract_json;
use crate::models::resume::ResumeContent;

fn parse(output: &str) -> Option<ResumeContent> {
    extract_json::<ResumeContent>(output)
}

/// Fails when any forbidden term appears in the bullets.
pub fn no_forbidden_terms(output: &str, forbidden_terms: &[String]) -> AssertionResult {
    let Some(content) = parse(output) else {
        return AssertionResult::failure(INVALID_JSON_REASON);
    };
    let bullet_text = content.all_bullet_text().to_lowercase();

    let found: Vec<&str> = forbidden_terms
        .iter()
        .filter(|term| matches_word_boundary(&bullet_text, term))
        .map(String::as_str)
        .collect();

    if found.is_empty() {
        AssertionResult::passed()
    } else {
        AssertionResult::failure(format!("Found forbidden terms: {}", found.join(", ")))
    }
}

/// Resume skills that the job description mentions must also appear in the bullets.
pub fn required_terms_present(
    output: &str,
    job_description: &str,
    resume_terms: &[String],
) -> AssertionResult {
    let Some(content) = parse(output) else {
        return AssertionResult::failure(INVALID_JSON_REASON);
    };
    let bullet_text = content.all_bullet_text().to_lowercase();
    let job_description = job_description.to_lowercase();

    let missing: Vec<&str> = resume_terms
        .iter()
        .filter(|term| matches_word_boundary(&job_description, term))
        .filter(|term| !matches_word_boundary(&bullet_text, term))
        .map(String::as_str)
        .collect();

    if missing.is_empty() {
        AssertionResult::passed()
    } else {
        AssertionResult::failure(format!(
            "Job description mentions these skills from your resume, but they're missing from bullets: {}",
            missing.join(", ")
        ))
    }
}

/// Fails when the target company's name shows up inside a bullet.
/// A missing or blank company name passes.
pub fn no_company_in_bullets(output: &str) -> AssertionResult {
    let Some(content) = parse(output) else {
        return AssertionResult::failure(INVALID_JSON_REASON);
    };
    let company = match content.company_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => return AssertionResult::passed(),
    };

    if matches_word_boundary(&content.all_bullet_text(), company) {
        AssertionResult::failure(format!(
            "Company name \"{company}\" should not appear in bullet points"
        ))
    } else {
        AssertionResult::passed()
    }
}
