//! Session-scoped state: gateway access, caches, and vocabularies.
//!
//! A [`SearchContext`] is created at session start and discarded at session
//! end; tests instantiate a fresh context per test so nothing leaks across.

use crate::cache::{FilterKind, ResultCache};
use crate::config::SessionConfig;
use crate::intersect::dedupe_by_id;
use mealdex_core::error::{GatewayResult, SessionError};
use mealdex_core::gateway::MealGateway;
use mealdex_core::model::{MealDetail, MealSummary};
use mealdex_search::CandidatePool;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Shared session state, owned behind an `Arc` so fetch tasks can hold it.
pub struct SearchContext<G> {
    gateway: Arc<G>,
    config: SessionConfig,
    results: ResultCache,
    details: RwLock<HashMap<String, MealDetail>>,
    trending: RwLock<Vec<MealSummary>>,
    categories: RwLock<Vec<String>>,
    areas: RwLock<Vec<String>>,
}

impl<G: MealGateway + 'static> SearchContext<G> {
    /// Create a context over the given gateway.
    pub fn new(gateway: G, config: SessionConfig) -> Self {
        Self {
            gateway: Arc::new(gateway),
            config,
            results: ResultCache::new(),
            details: RwLock::new(HashMap::new()),
            trending: RwLock::new(Vec::new()),
            categories: RwLock::new(Vec::new()),
            areas: RwLock::new(Vec::new()),
        }
    }

    /// Create a context ready to share with fetch tasks.
    pub fn shared(gateway: G, config: SessionConfig) -> Arc<Self> {
        Arc::new(Self::new(gateway, config))
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The result cache.
    #[must_use]
    pub fn results_cache(&self) -> &ResultCache {
        &self.results
    }

    /// Resolve one filter list through the cache, fetching on miss.
    pub async fn resolve(&self, kind: FilterKind, key: &str) -> GatewayResult<Vec<MealSummary>> {
        self.results
            .get_or_fetch(kind, key, || async {
                match kind {
                    FilterKind::Ingredient => self.gateway.filter_by_ingredient(key).await,
                    FilterKind::Category => self.gateway.filter_by_category(key).await,
                    FilterKind::Area => self.gateway.filter_by_area(key).await,
                }
            })
            .await
    }

    /// Rebuild the trending set from concurrent random picks.
    ///
    /// Picks that fail are dropped; the merge keeps whatever succeeded, so a
    /// bad day at the remote end degrades to a short (or empty) trending
    /// list instead of failing the session.
    pub async fn refresh_trending(self: &Arc<Self>) {
        let mut handles = Vec::with_capacity(self.config.trending_picks);
        for _ in 0..self.config.trending_picks {
            let ctx = Arc::clone(self);
            handles.push(tokio::spawn(async move { ctx.gateway.random_pick().await }));
        }

        let mut picks = Vec::new();
        for handle in handles {
            match handle.await {
                Ok(Ok(meal)) => picks.push(meal),
                Ok(Err(err)) => warn!(error = %err, "random pick failed, skipping"),
                Err(err) => warn!(error = %err, "random pick task failed, skipping"),
            }
        }

        let merged = dedupe_by_id(picks);
        debug!(meals = merged.len(), "trending set refreshed");
        *write(&self.trending) = merged;
    }

    /// Populate the category and area vocabularies.
    ///
    /// Both lists load concurrently; either failing degrades silently to an
    /// empty list, since the dropdowns are non-critical.
    pub async fn load_filter_values(self: &Arc<Self>) {
        let categories = {
            let ctx = Arc::clone(self);
            tokio::spawn(async move { ctx.gateway.list_categories().await })
        };
        let areas = {
            let ctx = Arc::clone(self);
            tokio::spawn(async move { ctx.gateway.list_areas().await })
        };

        *write(&self.categories) = settle_list(categories.await, "category");
        *write(&self.areas) = settle_list(areas.await, "area");
    }

    /// The current trending set.
    #[must_use]
    pub fn trending(&self) -> Vec<MealSummary> {
        read(&self.trending).clone()
    }

    /// Known category names.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        read(&self.categories).clone()
    }

    /// Known cuisine/area names.
    #[must_use]
    pub fn areas(&self) -> Vec<String> {
        read(&self.areas).clone()
    }

    /// Assemble the suggestion candidate pool from everything the session
    /// currently knows.
    #[must_use]
    pub fn candidate_pool(&self) -> Vec<String> {
        let mut pool = CandidatePool::new();
        pool.extend(read(&self.trending).iter().map(|meal| meal.name.clone()));
        pool.extend(read(&self.categories).iter().cloned());
        pool.extend(read(&self.areas).iter().cloned());
        pool.extend(self.results.ingredient_keys());
        pool.extend(mealdex_search::FALLBACK_TERMS.iter().copied());
        pool.into_terms()
    }

    /// Full record for one meal, cached by id for the session.
    pub async fn detail(&self, id: &str) -> Result<MealDetail, SessionError> {
        let id = id.trim();
        if let Some(hit) = read(&self.details).get(id).cloned() {
            return Ok(hit);
        }

        let detail = self
            .gateway
            .lookup_by_id(id)
            .await?
            .ok_or_else(|| SessionError::DetailNotFound { id: id.to_string() })?;

        write(&self.details)
            .entry(id.to_string())
            .or_insert_with(|| detail.clone());
        Ok(detail)
    }
}

/// Unwrap a spawned auxiliary fetch, degrading failures to an empty list.
fn settle_list(
    settled: Result<GatewayResult<Vec<String>>, tokio::task::JoinError>,
    what: &str,
) -> Vec<String> {
    match settled {
        Ok(Ok(values)) => values,
        Ok(Err(err)) => {
            warn!(error = %err, "loading {what} list failed, continuing without it");
            Vec::new()
        }
        Err(err) => {
            warn!(error = %err, "{what} list task failed, continuing without it");
            Vec::new()
        }
    }
}

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(std::sync::PoisonError::into_inner)
}
