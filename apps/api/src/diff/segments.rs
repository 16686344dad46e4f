//! Segment construction: turns per-token LCS membership into maximal typed segments.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::diff::tokenizer::is_whitespace_token;

/// Classification of a span of the rewritten bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentType {
    Unchanged,
    Added,
    /// Recognized for two-sided diffs; the forward diff never emits it.
    Removed,
    /// An addition that contains a job-description keyword.
    AddedFromJob,
}

/// A maximal run of rewritten text sharing one classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    pub text: String,
    #[serde(rename = "type")]
    pub segment_type: SegmentType,
}

impl DiffSegment {
    pub fn new(text: impl Into<String>, segment_type: SegmentType) -> Self {
        Self {
            text: text.into(),
            segment_type,
        }
    }
}

/// Builds merged segments for the `modified` tokens.
///
/// Words are `Unchanged` when their index is in `unchanged`, else `Added`.
/// A whitespace run takes its type from the nearest word on each side: it is
/// `Added` only when every existing neighbor is `Added`, and `Unchanged` when
/// it has no word neighbor at all.
pub fn build_segments(modified: &[&str], unchanged: &HashSet<usize>) -> Vec<DiffSegment> {
    let word_type = |idx: usize| {
        if unchanged.contains(&idx) {
            SegmentType::Unchanged
        } else {
            SegmentType::Added
        }
    };

    let typed = modified.iter().enumerate().map(|(idx, token)| {
        if !is_whitespace_token(token) {
            return (*token, word_type(idx));
        }

        let prev = (0..idx)
            .rev()
            .find(|&i| !is_whitespace_token(modified[i]))
            .map(&word_type);
        let next = (idx + 1..modified.len())
            .find(|&i| !is_whitespace_token(modified[i]))
            .map(&word_type);

        let segment_type = match (prev, next) {
            (None, None) => SegmentType::Unchanged,
            (prev, next) => {
                let all_added = prev.into_iter().chain(next).all(|t| t == SegmentType::Added);
                if all_added {
                    SegmentType::Added
                } else {
                    SegmentType::Unchanged
                }
            }
        };
        (*token, segment_type)
    });

    merge_segments(typed)
}

/// Concatenates consecutive pieces of the same type into one segment.
pub fn merge_segments<'a, I>(pieces: I) -> Vec<DiffSegment>
where
    I: IntoIterator<Item = (&'a str, SegmentType)>,
{
    let mut merged: Vec<DiffSegment> = Vec::new();
    for (text, segment_type) in pieces {
        match merged.last_mut() {
            Some(last) if last.segment_type == segment_type => last.text.push_str(text),
            _ => merged.push(DiffSegment::new(text, segment_type)),
        }
    }
    merged
}
