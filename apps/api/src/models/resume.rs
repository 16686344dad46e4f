//! Resume data: the base resume, the pool of bullets the AI may choose from,
//! and the structured answer the AI sends back.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Language,
    Framework,
    Tool,
    Concept,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub linkedin: String,
}

/// One role. `id` keys this role's bullets in the AI response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalTraining {
    pub institution: String,
    pub program: String,
    pub dates: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NonTechnicalWorkExperience {
    pub title: String,
    pub organization: String,
    pub location: String,
    pub dates: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseResume {
    pub contact: ContactInfo,
    pub technical_skills: Vec<Skill>,
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub technical_training: Vec<TechnicalTraining>,
    #[serde(default)]
    pub non_technical_work_experience: Vec<NonTechnicalWorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
}

impl BaseResume {
    /// Skill names, lowercased.
    pub fn skill_terms(&self) -> Vec<String> {
        self.technical_skills
            .iter()
            .map(|s| s.name.to_lowercase())
            .collect()
    }
}

/// Everything the AI may draw on: the full skill list and every known bullet
/// per role id (a superset of the resume's current highlights).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceCollection {
    pub all_skills: Vec<Skill>,
    pub all_bullet_points: BTreeMap<String, Vec<String>>,
}

/// Resume plus bullet pool, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeLibrary {
    pub resume: BaseResume,
    #[serde(default)]
    pub experience: ExperienceCollection,
}

impl ResumeLibrary {
    /// Loads the library from a JSON file. Roles without an entry in the
    /// bullet pool fall back to their resume highlights.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read resume data from {}", path.display()))?;
        let library: ResumeLibrary = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid resume data in {}", path.display()))?;
        Ok(library.with_highlight_fallback())
    }

    fn with_highlight_fallback(mut self) -> Self {
        for role in &self.resume.work_experience {
            self.experience
                .all_bullet_points
                .entry(role.id.clone())
                .or_insert_with(|| role.highlights.clone());
        }
        if self.experience.all_skills.is_empty() {
            self.experience.all_skills = self.resume.technical_skills.clone();
        }
        self
    }

    /// Role ids in resume order.
    pub fn role_ids(&self) -> Vec<&str> {
        self.resume
            .work_experience
            .iter()
            .map(|r| r.id.as_str())
            .collect()
    }
}

/// The AI backend's structured answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContent {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub technical_skills: Vec<String>,
    /// Job-description terms the backend reports having worked into the bullets.
    #[serde(default)]
    pub used_keywords: Vec<String>,
    #[serde(default)]
    pub bullets: BTreeMap<String, Vec<String>>,
}

impl ResumeContent {
    /// All bullets across roles, joined with single spaces.
    pub fn all_bullet_text(&self) -> String {
        self.bullets
            .values()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LIBRARY_JSON: &str = r#"{
        "resume": {
            "contact": {"name": "Ada", "email": "ada@example.com", "linkedin": "linkedin.com/in/ada"},
            "technical_skills": [
                {"name": "TypeScript", "category": "language"},
                {"name": "React", "category": "framework"}
            ],
            "work_experience": [
                {
                    "id": "senior_engineer",
                    "company": "Acme",
                    "title": "Senior Engineer",
                    "start_date": "2022",
                    "end_date": "Present",
                    "highlights": ["Built web applications"]
                },
                {
                    "id": "engineer",
                    "company": "Acme",
                    "title": "Engineer",
                    "start_date": "2020",
                    "end_date": "2022",
                    "highlights": ["Fixed bugs"]
                }
            ]
        },
        "experience": {
            "all_skills": [],
            "all_bullet_points": {
                "senior_engineer": ["Built web applications", "Led a team of four"]
            }
        }
    }"#;

    #[test]
    fn test_load_library_fills_missing_roles_from_highlights() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LIBRARY_JSON.as_bytes()).unwrap();

        let library = ResumeLibrary::load(file.path()).unwrap();
        assert_eq!(library.experience.all_bullet_points["senior_engineer"].len(), 2);
        assert_eq!(
            library.experience.all_bullet_points["engineer"],
            vec!["Fixed bugs".to_string()]
        );
        assert_eq!(library.experience.all_skills.len(), 2);
        assert_eq!(library.role_ids(), vec!["senior_engineer", "engineer"]);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = ResumeLibrary::load("/nonexistent/resume.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/resume.json"));
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(ResumeLibrary::load(file.path()).is_err());
    }

    #[test]
    fn test_skill_category_serde_lowercase() {
        let skill: Skill = serde_json::from_str(r#"{"name": "Git", "category": "tool"}"#).unwrap();
        assert_eq!(skill.category, SkillCategory::Tool);
    }

    #[test]
    fn test_resume_content_reads_camel_case() {
        let content: ResumeContent = serde_json::from_str(
            r#"{
                "companyName": "Acme Corp",
                "technicalSkills": ["React"],
                "usedKeywords": ["React", "agile"],
                "bullets": {"senior_engineer": ["a", "b"], "engineer": ["c"]}
            }"#,
        )
        .unwrap();
        assert_eq!(content.company_name.as_deref(), Some("Acme Corp"));
        assert_eq!(content.used_keywords, vec!["React", "agile"]);
        assert_eq!(content.all_bullet_text(), "c a b");
    }

    #[test]
    fn test_resume_content_missing_fields_default() {
        let content: ResumeContent = serde_json::from_str("{}").unwrap();
        assert_eq!(content, ResumeContent::default());
    }

    #[test]
    fn test_skill_terms_are_lowercase() {
        let library: ResumeLibrary = serde_json::from_str(LIBRARY_JSON).unwrap();
        assert_eq!(library.resume.skill_terms(), vec!["typescript", "react"]);
    }
}
