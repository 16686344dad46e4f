// Word-level diff engine for rewritten resume bullets.
// Aligns an original bullet with its rewrite, types every span of the rewrite,
// and attributes additions to job-description keywords.
// Everything below `handlers` is pure: no I/O, no shared state.

pub mod annotate;
pub mod handlers;
pub mod keywords;
pub mod lcs;
pub mod matcher;
pub mod segments;
pub mod tokenizer;

pub use annotate::{diff_bullets, diff_roles, BulletDiff};
pub use keywords::{matches_word_boundary, KeywordMatcher};
pub use matcher::find_best_match;
pub use segments::{DiffSegment, SegmentType};

/// Computes a word-level diff of `modified` against `original`.
///
/// The returned segments concatenate back to `modified` exactly. Added spans
/// containing one of `used_keywords` are typed `AddedFromJob`; pass an empty
/// slice to skip attribution.
pub fn compute_word_diff(
    original: &str,
    modified: &str,
    used_keywords: &[String],
) -> Vec<DiffSegment> {
    let segments = unattributed_diff(original, modified);
    if used_keywords.is_empty() {
        return segments;
    }
    KeywordMatcher::new(used_keywords).mark(segments)
}

/// Alignment and segmentation only; no keyword attribution.
pub(crate) fn unattributed_diff(original: &str, modified: &str) -> Vec<DiffSegment> {
    let original_tokens = tokenizer::tokenize(original);
    let modified_tokens = tokenizer::tokenize(modified);

    let unchanged = lcs::lcs_indices(&original_tokens, &modified_tokens);
    segments::build_segments(&modified_tokens, &unchanged)
}
