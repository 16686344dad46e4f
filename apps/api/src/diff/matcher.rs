//! Best-original matcher: picks the original bullet a rewrite most likely came from.

use std::collections::HashSet;

use crate::diff::tokenizer::lowercase_words;

/// Share of `original`'s words that also appear in `modified_words`.
///
/// Coverage of the original, not symmetric overlap: a rewrite that keeps every
/// original word scores 1.0 however many words it adds.
pub fn coverage_ratio(original: &str, modified_words: &HashSet<String>) -> f64 {
    let words = lowercase_words(original);
    let common = words.iter().filter(|w| modified_words.contains(*w)).count();
    common as f64 / words.len().max(1) as f64
}

/// Returns the candidate with the strictly highest coverage ratio.
///
/// Ties, and the case where nothing overlaps, fall back to the first
/// candidate. Returns `None` only for an empty candidate list.
pub fn find_best_match<'a, S: AsRef<str>>(modified: &str, originals: &'a [S]) -> Option<&'a str> {
    let first = originals.first()?.as_ref();
    let modified_words: HashSet<String> = lowercase_words(modified).into_iter().collect();

    let mut best = first;
    let mut best_score = 0.0_f64;
    for original in originals {
        let original = original.as_ref();
        let score = coverage_ratio(original, &modified_words);
        if score > best_score {
            best_score = score;
            best = original;
        }
    }
    Some(best)
}
