//! Mock backend: returns a canned structured resume after an optional delay.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::llm_client::{
    estimate_tokens, AiProvider, CompletionRequest, CompletionResponse, LlmError, Usage,
};
use crate::models::resume::ResumeContent;

/// Deterministic provider for local runs and tests.
#[derive(Debug, Clone)]
pub struct MockProvider {
    content: ResumeContent,
    delay: Duration,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(default_content(), Duration::ZERO)
    }
}

impl MockProvider {
    pub fn new(content: ResumeContent, delay: Duration) -> Self {
        Self { content, delay }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl AiProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let content = serde_json::to_string_pretty(&self.content)?;
        let prompt_tokens = estimate_tokens(&request.prompt);
        let completion_tokens = estimate_tokens(&content);
        debug!("Mock completion: prompt_tokens={prompt_tokens}, completion_tokens={completion_tokens}");

        Ok(CompletionResponse {
            content,
            usage: Some(Usage {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens + completion_tokens,
            }),
        })
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Canned answer keyed by the role ids in `data/resume.json`.
fn default_content() -> ResumeContent {
    ResumeContent {
        company_name: Some("Acme Corp".to_string()),
        technical_skills: strings(&[
            "JavaScript (ES6+)",
            "TypeScript",
            "React",
            "Python",
            "Git",
            "Jest",
            "CI/CD",
            "Vite",
            "RESTful APIs",
        ]),
        used_keywords: strings(&["React", "TypeScript", "CI/CD", "scalable", "agile"]),
        bullets: BTreeMap::from([
            (
                "senior_engineer".to_string(),
                strings(&[
                    "Design and build scalable, production-grade frontend applications using React and TypeScript, with a strong focus on performance, accessibility, and maintainable architecture",
                    "Led improvements to the CI/CD pipeline, parallelizing unit and integration tests and reducing build times by 67% (15 → 5 minutes) using modern automation practices",
                    "Analyze large datasets and application behavior to identify system-level issues, inform technical decisions, and improve platform reliability",
                ]),
            ),
            (
                "engineer_ii".to_string(),
                strings(&[
                    "Delivered frontend-focused solutions across the full software development lifecycle, from technical design through development, testing, and production support",
                    "Served as technical lead on a 3-month initiative, authoring technical specifications, coordinating with stakeholders, and guiding two engineers through agile sprints to successful delivery",
                ]),
            ),
            (
                "engineer_i".to_string(),
                strings(&[
                    "Developed, debugged, and maintained code in a fast-paced environment using modern programming languages and agile methodologies",
                ]),
            ),
            (
                "frontend_engineer".to_string(),
                strings(&[
                    "Collaborated cross-functionally with product managers and designers to translate user needs into intuitive, responsive UI implementations",
                ]),
            ),
            (
                "developer_support".to_string(),
                strings(&[
                    "Promoted to Frontend Engineer after seven months of successfully solving user issues",
                ]),
            ),
        ]),
    }
}
