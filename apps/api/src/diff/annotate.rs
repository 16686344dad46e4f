//! Bullet annotation: what the rendering layer calls for a whole list of rewrites.
//!
//! Each rewritten bullet is paired with its most likely original and diffed.
//! A bullet with no candidate originals is returned without segments and is
//! rendered as plain text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::diff::keywords::KeywordMatcher;
use crate::diff::matcher::find_best_match;
use crate::diff::segments::DiffSegment;
use crate::diff::unattributed_diff;

/// Diff of one rewritten bullet against the original it was matched to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletDiff {
    pub text: String,
    pub matched_original: Option<String>,
    /// `None` when there was nothing to diff against.
    pub segments: Option<Vec<DiffSegment>>,
}

fn annotate(bullet: &str, originals: &[String], matcher: &KeywordMatcher) -> BulletDiff {
    match find_best_match(bullet, originals) {
        Some(original) => BulletDiff {
            text: bullet.to_string(),
            matched_original: Some(original.to_string()),
            segments: Some(matcher.mark(unattributed_diff(original, bullet))),
        },
        None => BulletDiff {
            text: bullet.to_string(),
            matched_original: None,
            segments: None,
        },
    }
}

/// Diffs every rewritten bullet against its best match among `originals`.
pub fn diff_bullets(
    rewritten: &[String],
    originals: &[String],
    used_keywords: &[String],
) -> Vec<BulletDiff> {
    let matcher = KeywordMatcher::new(used_keywords);
    rewritten
        .iter()
        .map(|bullet| annotate(bullet, originals, &matcher))
        .collect()
}

/// Diffs rewritten bullets role by role. A role missing from
/// `originals_by_role` gets plain bullets.
pub fn diff_roles(
    originals_by_role: &BTreeMap<String, Vec<String>>,
    rewritten_by_role: &BTreeMap<String, Vec<String>>,
    used_keywords: &[String],
) -> BTreeMap<String, Vec<BulletDiff>> {
    let matcher = KeywordMatcher::new(used_keywords);
    rewritten_by_role
        .iter()
        .map(|(role, bullets)| {
            let originals = originals_by_role
                .get(role)
                .map(Vec::as_slice)
                .unwrap_or_default();
            if originals.is_empty() {
                debug!("No original bullets for role '{role}'; bullets left undiffed");
            }
            let diffs = bullets
                .iter()
                .map(|bullet| annotate(bullet, originals, &matcher))
                .collect();
            (role.clone(), diffs)
        })
        .collect()
}
