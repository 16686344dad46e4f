//! Output assertions: checks run against a raw AI answer before it is trusted.
//!
//! Each check parses the structured answer out of the raw text and fails with
//! a reason a human can act on.

pub mod checks;
pub mod handlers;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use checks::{no_company_in_bullets, no_forbidden_terms, required_terms_present};

pub const INVALID_JSON_REASON: &str = "Could not extract valid JSON from output";

/// Outcome of one assertion. Failures always score 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssertionResult {
    pub pass: bool,
    pub score: f32,
    pub reason: Option<String>,
}

impl AssertionResult {
    pub fn passed() -> Self {
        Self {
            pass: true,
            score: 1.0,
            reason: None,
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            pass: false,
            score: 0.0,
            reason: Some(reason.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssertionKind {
    NoForbiddenTerms,
    RequiredTermsPresent,
    NoCompanyInBullets,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedResult {
    pub assertion: AssertionKind,
    #[serde(flatten)]
    pub result: AssertionResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssertionReport {
    pub passed: bool,
    pub results: Vec<NamedResult>,
}

/// Runs every assertion against `output`.
pub fn evaluate_all(
    output: &str,
    job_description: &str,
    resume_terms: &[String],
    forbidden_terms: &[String],
) -> AssertionReport {
    let results = vec![
        NamedResult {
            assertion: AssertionKind::NoForbiddenTerms,
            result: no_forbidden_terms(output, forbidden_terms),
        },
        NamedResult {
            assertion: AssertionKind::RequiredTermsPresent,
            result: required_terms_present(output, job_description, resume_terms),
        },
        NamedResult {
            assertion: AssertionKind::NoCompanyInBullets,
            result: no_company_in_bullets(output),
        },
    ];

    AssertionReport {
        passed: results.iter().all(|r| r.result.pass),
        results,
    }
}

/// Parses a forbidden-terms list: one term per line, blank lines and `#`
/// comments skipped, terms lowercased.
pub fn parse_forbidden_terms(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Reads and parses a forbidden-terms file.
pub fn load_forbidden_terms(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read forbidden terms from {}", path.display()))?;
    Ok(parse_forbidden_terms(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_failure_scores_zero() {
        let result = AssertionResult::failure("test reason");
        assert_eq!(
            result,
            AssertionResult {
                pass: false,
                score: 0.0,
                reason: Some("test reason".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_forbidden_terms_skips_comments_and_blanks() {
        let terms = parse_forbidden_terms("# banned\nSynergy\n\n  Rockstar  \n#ninja\n");
        assert_eq!(terms, vec!["synergy", "rockstar"]);
    }

    #[test]
    fn test_load_forbidden_terms_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "Guru").unwrap();
        let terms = load_forbidden_terms(file.path()).unwrap();
        assert_eq!(terms, vec!["guru"]);
    }

    #[test]
    fn test_load_forbidden_terms_missing_file() {
        assert!(load_forbidden_terms("/nonexistent/forbidden.txt").is_err());
    }

    #[test]
    fn test_evaluate_all_passes_clean_output() {
        let output = json!({
            "companyName": "Acme Corp",
            "bullets": {"senior_engineer": ["Built React dashboards"]}
        })
        .to_string();
        let report = evaluate_all(
            &output,
            "We use React daily",
            &["react".to_string()],
            &["rockstar".to_string()],
        );
        assert!(report.passed);
        assert_eq!(report.results.len(), 3);
    }

    #[test]
    fn test_evaluate_all_reports_each_failure() {
        let output = json!({
            "companyName": "Acme Corp",
            "bullets": {"senior_engineer": ["Rockstar engineer at Acme Corp"]}
        })
        .to_string();
        let report = evaluate_all(&output, "", &[], &["rockstar".to_string()]);
        assert!(!report.passed);
        let failed: Vec<AssertionKind> = report
            .results
            .iter()
            .filter(|r| !r.result.pass)
            .map(|r| r.assertion)
            .collect();
        assert_eq!(
            failed,
            vec![AssertionKind::NoForbiddenTerms, AssertionKind::NoCompanyInBullets]
        );
    }

    #[test]
    fn test_named_result_serializes_flat() {
        let named = NamedResult {
            assertion: AssertionKind::NoCompanyInBullets,
            result: AssertionResult::passed(),
        };
        let value = serde_json::to_value(&named).unwrap();
        assert_eq!(value["assertion"], "no-company-in-bullets");
        assert_eq!(value["pass"], true);
    }
}
