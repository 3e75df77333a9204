//! Fuzzy string similarity.
//!
//! Similarity is a longest-common-subsequence ratio over the characters
//! of both strings:
//!
//! ```text
//! ratio = 2 * lcs(a, b) / (len(a) + len(b))
//! ```
//!
//! Identical strings score 1.0, strings sharing no characters score 0.0,
//! and the ratio grows with shared subsequence length. The algorithm is
//! fixed: scores must be reproducible across runs and hosts.

/// Similarity ratio in [0.0, 1.0] between two strings.
///
/// Operates on raw characters; callers normalize case and whitespace
/// first if they want insensitive matching.
#[must_use]
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let lcs = lcs_length(&a, &b);
    (2 * lcs) as f64 / (a.len() + b.len()) as f64
}

/// Similarity scaled and rounded to an integer in [0, 100].
#[must_use]
pub fn match_score(a: &str, b: &str) -> i64 {
    (similarity_ratio(a, b) * 100.0).round() as i64
}

/// Longest common subsequence length, two-row dynamic programming.
fn lcs_length(a: &[char], b: &[char]) -> usize {
    // Keep the shorter string on the inner dimension.
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut prev = vec![0usize; inner.len() + 1];
    let mut curr = vec![0usize; inner.len() + 1];

    for &oc in outer {
        for (j, &ic) in inner.iter().enumerate() {
            curr[j + 1] = if oc == ic {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}
