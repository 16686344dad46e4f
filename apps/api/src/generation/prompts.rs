//! Resume customization prompt and company-name extraction from a job description.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::llm_client::prompts::ANTI_HALLUCINATION_INSTRUCTION;
use crate::models::resume::{BaseResume, ExperienceCollection};

/// Fallback when no company name can be found in a job description.
pub const DEFAULT_COMPANY_NAME: &str = "Company";

/// Resume customization prompt template.
/// Replace: {anti_hallucination}, {skills_list}, {bullets_by_role}, {name},
///          {email}, {linkedin}, {current_skills}, {bullets_schema}, {job_description}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"You are a resume customization assistant. Your task is to customize a resume for a specific job description.

{anti_hallucination}

JOB DESCRIPTION:
{job_description}

AVAILABLE SKILLS (select only from this list):
{skills_list}

AVAILABLE BULLET POINTS BY ROLE:
{bullets_by_role}

RESUME TO CUSTOMIZE:
Name: {name}
Email: {email}
LinkedIn: {linkedin}

Current Skills: {current_skills}

TASK:
1. Extract the company name from the job description
2. Select the most relevant skills from the AVAILABLE SKILLS list for this job (8-12 skills)
3. Choose the most relevant bullet points for each role to emphasize relevant experience
4. List every job description keyword you worked into the bullets as "usedKeywords"
5. Return ONLY valid JSON in this exact format, no markdown or explanation:

{
  "companyName": "Company Name",
  "technicalSkills": ["Skill1", "Skill2", ...],
  "usedKeywords": ["keyword1", "keyword2", ...],
  "bullets": {
{bullets_schema}
  }
}

Remember:
- Do NOT add any skills or bullet points not provided above
- Select bullet points that best match the job requirements
- Include 2-4 bullets for the most recent two roles, 1-2 for other roles"#;

/// Builds the customization prompt for one job description.
pub fn build_resume_prompt(
    job_description: &str,
    resume: &BaseResume,
    experience: &ExperienceCollection,
) -> String {
    let skills_list = experience
        .all_skills
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut bullets_by_role = Vec::new();
    for (role_id, bullets) in &experience.all_bullet_points {
        let title = resume
            .work_experience
            .iter()
            .find(|r| &r.id == role_id)
            .map(|r| format!("{} ({role_id})", r.title))
            .unwrap_or_else(|| role_id.clone());
        bullets_by_role.push(format!("{title}:"));
        bullets_by_role.extend(bullets.iter().map(|b| format!("  - {b}")));
    }

    let bullets_schema = experience
        .all_bullet_points
        .keys()
        .map(|role_id| format!(r#"    "{role_id}": ["bullet1", "bullet2", ...]"#))
        .collect::<Vec<_>>()
        .join(",\n");

    let current_skills = resume
        .technical_skills
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    // Job description goes in last so its text is never treated as a placeholder
    RESUME_PROMPT_TEMPLATE
        .replace("{anti_hallucination}", ANTI_HALLUCINATION_INSTRUCTION)
        .replace("{skills_list}", &skills_list)
        .replace("{bullets_by_role}", &bullets_by_role.join("\n"))
        .replace("{name}", &resume.contact.name)
        .replace("{email}", &resume.contact.email)
        .replace("{linkedin}", &resume.contact.linkedin)
        .replace("{current_skills}", &current_skills)
        .replace("{bullets_schema}", &bullets_schema)
        .replace("{job_description}", job_description)
        .trim()
        .to_string()
}

static COMPANY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?:at|@)\s+([A-Z][A-Za-z0-9]+(?:\s+[A-Z][A-Za-z0-9]+)*)(?:\s+as|\s+for|\s+is|[!.,]|$)",
        r"(?i:join)\s+([A-Z][A-Za-z0-9]+(?:\s+[A-Z][A-Za-z0-9]+)*)(?:\s+as|\s+for|\s+is|[!.,]|$)",
        r"(?i:hiring\s+for)\s+([A-Z][A-Za-z0-9]+(?:\s+[A-Z][A-Za-z0-9]+)*)(?:\s+as|\s+is|[!.,]|$)",
        r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?:Labs|Inc|Corp|LLC|Ltd|Co))",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("company pattern is valid"))
    .collect()
});

/// Finds the hiring company in a job description, trying each pattern in
/// order. Lead-in words match in any case; name words must be capitalized.
/// Returns `DEFAULT_COMPANY_NAME` when none match.
pub fn extract_company_name(job_description: &str) -> String {
    COMPANY_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(job_description))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_string())
}
