//! Keyword attribution: retypes added spans that contain a job-description keyword.
//!
//! A keyword matches case-insensitively and literally (escaped), and only when
//! the characters on both sides of the match are non-word characters or the
//! edges of the text. Word characters are ASCII letters, digits and `_`.

use regex::Regex;
use tracing::warn;

use crate::diff::segments::{DiffSegment, SegmentType};

const NON_WORD: &str = "[^0-9A-Za-z_]";

/// Builds the boundary-delimited, case-insensitive pattern for one term.
fn boundary_pattern(term: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        "(?i)(?:^|{NON_WORD}){}(?:{NON_WORD}|$)",
        regex::escape(term)
    ))
}

/// True when `term` occurs in `text` as a whole word or phrase.
///
/// Blank terms never match.
pub fn matches_word_boundary(text: &str, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return false;
    }
    match boundary_pattern(term) {
        Ok(pattern) => pattern.is_match(text),
        Err(e) => {
            warn!("Skipping unmatchable term '{term}': {e}");
            false
        }
    }
}

/// Compiled patterns for one keyword list. Build once per resume and reuse it
/// across that resume's bullets.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    patterns: Vec<Regex>,
}

impl KeywordMatcher {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        let patterns = keywords
            .iter()
            .map(|k| k.as_ref().trim())
            .filter(|k| !k.is_empty())
            .filter_map(|k| match boundary_pattern(k) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!("Skipping unmatchable keyword '{k}': {e}");
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True when any keyword occurs in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }

    /// Retypes `Added` segments whose trimmed text matches a keyword.
    /// Boundaries and every other segment are left untouched.
    pub fn mark(&self, segments: Vec<DiffSegment>) -> Vec<DiffSegment> {
        if self.is_empty() {
            return segments;
        }
        segments
            .into_iter()
            .map(|mut segment| {
                if segment.segment_type == SegmentType::Added {
                    let text = segment.text.trim();
                    if !text.is_empty() && self.matches(text) {
                        segment.segment_type = SegmentType::AddedFromJob;
                    }
                }
                segment
            })
            .collect()
    }
}
