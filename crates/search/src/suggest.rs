//! Ranked suggestions and "did you mean" corrections.

use crate::score::score;
use serde::{Deserialize, Serialize};

/// Tuning knobs for suggestion ranking.
///
/// The defaults match long-standing UX choices; both values are tuning
/// parameters rather than correctness requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Maximum number of live suggestions returned
    pub max_suggestions: usize,
    /// A correction is only surfaced when its score is strictly below this
    pub correction_threshold: f64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 6,
            correction_threshold: 0.4,
        }
    }
}

/// Rank pool candidates against a query for live suggestions.
///
/// Candidates that do not score (empty strings) are discarded; the rest are
/// sorted ascending by score, ties keeping pool order, truncated to
/// `config.max_suggestions`.
#[must_use]
pub fn suggest(query: &str, pool: &[String], config: &SuggestConfig) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = pool
        .iter()
        .filter_map(|candidate| score(query, candidate).map(|s| (s, candidate)))
        .collect();

    scored.sort_by(|a, b| a.0.total_cmp(&b.0));
    scored.truncate(config.max_suggestions);
    scored.into_iter().map(|(_, c)| c.clone()).collect()
}

/// The single best correction for a failed query, if convincing enough.
///
/// Returns the lowest-scoring pool candidate when its score is strictly below
/// the configured threshold and it is not case-insensitively identical to the
/// query itself (never suggest the failed term back to the user).
#[must_use]
pub fn best_correction(query: &str, pool: &[String], config: &SuggestConfig) -> Option<String> {
    let mut best: Option<(f64, &String)> = None;

    for candidate in pool {
        let Some(s) = score(query, candidate) else {
            continue;
        };
        // strict less-than keeps the earliest pool entry on ties
        if best.is_none_or(|(best_score, _)| s < best_score) {
            best = Some((s, candidate));
        }
    }

    let (best_score, candidate) = best?;
    if best_score >= config.correction_threshold {
        return None;
    }
    if candidate.to_lowercase() == query.to_lowercase() {
        return None;
    }
    Some(candidate.clone())
}
