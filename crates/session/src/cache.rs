//! Per-filter-kind memoized result store.
//!
//! Entries are write-once per normalized key and live for the session; the
//! catalog is near-static, so there is no eviction and no TTL. Failed fetches
//! are not cached, so a later call retries. Concurrent calls for the same
//! uncached key may fetch twice; the first stored result wins.

use mealdex_core::error::GatewayResult;
use mealdex_core::model::MealSummary;
use std::collections::HashMap;
use std::future::Future;
use std::sync::RwLock;
use tracing::debug;

/// Which remote list-query a cached entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// filter-by-ingredient results
    Ingredient,
    /// filter-by-category results
    Category,
    /// filter-by-area results
    Area,
}

impl FilterKind {
    /// Short label for logging.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ingredient => "ingredient",
            Self::Category => "category",
            Self::Area => "area",
        }
    }
}

/// Case-normalized lookup key: "Chicken" and "chicken" hit the same entry.
fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Session-lifetime store of already-fetched filter results.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: RwLock<HashMap<(FilterKind, String), Vec<MealSummary>>>,
}

impl ResultCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored result for a key, if present.
    #[must_use]
    pub fn get(&self, kind: FilterKind, key: &str) -> Option<Vec<MealSummary>> {
        let entries = read(&self.entries);
        entries.get(&(kind, normalize_key(key))).cloned()
    }

    /// Return the cached result or fetch, store, and return it.
    ///
    /// A failed fetch stores nothing. If another caller stored the key while
    /// this fetch was in flight, the earlier entry is kept.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        kind: FilterKind,
        key: &str,
        fetcher: F,
    ) -> GatewayResult<Vec<MealSummary>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = GatewayResult<Vec<MealSummary>>>,
    {
        let normalized = normalize_key(key);

        if let Some(hit) = {
            let entries = read(&self.entries);
            entries.get(&(kind, normalized.clone())).cloned()
        } {
            debug!(kind = kind.label(), key = %normalized, "filter cache hit");
            return Ok(hit);
        }

        let fetched = fetcher().await?;

        let mut entries = write(&self.entries);
        let stored = entries
            .entry((kind, normalized))
            .or_insert_with(|| fetched);
        Ok(stored.clone())
    }

    /// Keys already used for ingredient searches, for the suggestion pool.
    #[must_use]
    pub fn ingredient_keys(&self) -> Vec<String> {
        let entries = read(&self.entries);
        let mut keys: Vec<String> = entries
            .keys()
            .filter(|(kind, _)| *kind == FilterKind::Ingredient)
            .map(|(_, key)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    /// Number of stored entries across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        read(&self.entries).len()
    }

    /// True when nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        read(&self.entries).is_empty()
    }
}

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(std::sync::PoisonError::into_inner)
}
