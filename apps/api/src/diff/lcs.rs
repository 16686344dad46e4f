//! Longest common token subsequence between an original and a modified bullet.
//!
//! Only the modified side of the alignment is reported: the indices of
//! modified tokens that survive from the original.

use std::collections::HashSet;

/// Returns the indices of `modified` tokens that belong to the LCS of the two
/// token sequences under case-insensitive equality.
///
/// Backtracking from the end of both sequences: equal tokens take the
/// diagonal; otherwise the original pointer moves only when dropping the
/// original token keeps a strictly longer subsequence, and every tie treats the
/// current modified token as unmatched. The same input pair always yields the
/// same index set.
pub fn lcs_indices(original: &[&str], modified: &[&str]) -> HashSet<usize> {
    let a: Vec<String> = original.iter().map(|t| t.to_lowercase()).collect();
    let b: Vec<String> = modified.iter().map(|t| t.to_lowercase()).collect();
    let (m, n) = (a.len(), b.len());

    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }

    let mut indices = HashSet::with_capacity(table[m][n]);
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            indices.insert(j - 1);
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] > table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    indices
}
