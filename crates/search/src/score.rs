//! Match scoring: lower is better.

use crate::fuzzy::levenshtein;

/// Score a candidate term against a query.
///
/// Returns `None` when either string is empty (no meaningful match).
/// Case-insensitive substring containment scores `0.0`, the best possible
/// value. Otherwise the score is the edit distance divided by the candidate
/// length, so the same distance against a longer candidate ranks worse.
#[must_use]
pub fn score(query: &str, candidate: &str) -> Option<f64> {
    if query.is_empty() || candidate.is_empty() {
        return None;
    }

    let query_folded = query.to_lowercase();
    let candidate_folded = candidate.to_lowercase();

    if candidate_folded.contains(&query_folded) {
        return Some(0.0);
    }

    let distance = levenshtein(&query_folded, &candidate_folded);
    let candidate_len = candidate_folded.chars().count().max(1);

    #[allow(clippy::cast_precision_loss)]
    Some(distance as f64 / candidate_len as f64)
}
