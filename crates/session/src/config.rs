//! Session configuration.

use mealdex_search::SuggestConfig;
use serde::{Deserialize, Serialize};

/// Tuning knobs for a browsing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Concurrent random picks issued when refreshing the trending set
    pub trending_picks: usize,
    /// Results per page
    pub per_page: usize,
    /// Suggestion ranking parameters
    pub suggest: SuggestConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            trending_picks: 8,
            per_page: 12,
            suggest: SuggestConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Builder-style method to set the trending pick count.
    #[must_use]
    pub fn with_trending_picks(mut self, picks: usize) -> Self {
        self.trending_picks = picks;
        self
    }

    /// Builder-style method to set the page size.
    #[must_use]
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Builder-style method to set the suggestion parameters.
    #[must_use]
    pub fn with_suggest(mut self, suggest: SuggestConfig) -> Self {
        self.suggest = suggest;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.trending_picks, 8);
        assert_eq!(config.per_page, 12);
        assert_eq!(config.suggest.max_suggestions, 6);
        assert!((config.suggest.correction_threshold - 0.4).abs() < 1e-9);
    }

    #[test]
    fn builders() {
        let config = SessionConfig::default()
            .with_trending_picks(4)
            .with_per_page(20);
        assert_eq!(config.trending_picks, 4);
        assert_eq!(config.per_page, 20);
    }
}
