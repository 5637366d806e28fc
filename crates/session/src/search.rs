//! The search orchestrator.
//!
//! One search invocation walks: resolve every active filter through the
//! cache (fetches issued concurrently, awaited jointly, fail-fast), intersect
//! the lists, deduplicate by id, then either publish results or run the
//! "did you mean" correction flow. An empty filter set falls back to the
//! trending set.

use crate::cache::FilterKind;
use crate::context::SearchContext;
use crate::intersect::{dedupe_by_id, intersect};
use crate::results::SortOrder;
use mealdex_core::error::GatewayResult;
use mealdex_core::gateway::MealGateway;
use mealdex_core::model::{FilterSet, MealSummary};
use mealdex_search::best_correction;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Where one search invocation currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// No search has run yet
    Idle,
    /// A search is in flight
    Searching,
    /// The search found meals
    Succeeded(Vec<MealSummary>),
    /// Zero matches, but a convincing alternate term exists
    EmptyWithSuggestion {
        /// The query that found nothing
        query: String,
        /// The "did you mean" candidate; re-running the search with this
        /// term substituted as the ingredient query is the retry path
        suggestion: String,
    },
    /// Zero matches and no convincing correction
    EmptyNoSuggestion,
    /// A gateway call failed; partial results are discarded
    Failed,
}

impl SearchState {
    /// The result list, when this state carries one.
    #[must_use]
    pub fn results(&self) -> Option<&[MealSummary]> {
        match self {
            Self::Succeeded(results) => Some(results),
            _ => None,
        }
    }
}

/// Drives searches over a shared [`SearchContext`].
///
/// Each invocation gets a monotonically increasing id; a settlement is
/// published only while it is still the newest, so a stale search finishing
/// late never overwrites fresher results.
pub struct SearchSession<G> {
    ctx: Arc<SearchContext<G>>,
    latest: AtomicU64,
    state: RwLock<SearchState>,
    page: AtomicUsize,
    sort: RwLock<SortOrder>,
}

impl<G: MealGateway + 'static> SearchSession<G> {
    /// Create a session over the given context.
    pub fn new(ctx: Arc<SearchContext<G>>) -> Self {
        Self {
            ctx,
            latest: AtomicU64::new(0),
            state: RwLock::new(SearchState::Idle),
            page: AtomicUsize::new(1),
            sort: RwLock::new(SortOrder::NameAsc),
        }
    }

    /// The shared context.
    #[must_use]
    pub fn context(&self) -> &Arc<SearchContext<G>> {
        &self.ctx
    }

    /// The last published state.
    #[must_use]
    pub fn state(&self) -> SearchState {
        read(&self.state).clone()
    }

    /// Current 1-based page.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page.load(Ordering::SeqCst)
    }

    /// Move to the given 1-based page.
    pub fn set_page(&self, page: usize) {
        self.page.store(page.max(1), Ordering::SeqCst);
    }

    /// Current sort order.
    #[must_use]
    pub fn sort(&self) -> SortOrder {
        *read(&self.sort)
    }

    /// Change the sort order.
    pub fn set_sort(&self, order: SortOrder) {
        *write(&self.sort) = order;
    }

    /// Run one search and publish its settlement if still the newest.
    ///
    /// The returned state is this invocation's settlement either way; callers
    /// racing searches read [`SearchSession::state`] for what is displayed.
    pub async fn search(&self, filters: &FilterSet) -> SearchState {
        let invocation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.publish_if_current(invocation, SearchState::Searching);

        let settled = self.run(filters).await;
        self.publish_if_current(invocation, settled.clone());
        settled
    }

    /// Publish a settlement while it is still the newest invocation. The page
    /// reset on success lives inside the same guard, so a stale settlement
    /// never disturbs a newer search's paging either.
    fn publish_if_current(&self, invocation: u64, state: SearchState) {
        if self.latest.load(Ordering::SeqCst) == invocation {
            if matches!(state, SearchState::Succeeded(_)) {
                self.set_page(1);
            }
            *write(&self.state) = state;
        } else {
            debug!(invocation, "ignoring stale search settlement");
        }
    }

    async fn run(&self, filters: &FilterSet) -> SearchState {
        // Empty filter set is the trending fallback, not "match everything".
        if filters.is_empty() {
            return SearchState::Succeeded(self.ctx.trending());
        }

        let lists = match self.fetch_filter_lists(filters).await {
            Ok(lists) => lists,
            Err(err) => {
                warn!(error = %err, "search failed at the gateway");
                return SearchState::Failed;
            }
        };

        let combined = match lists.len() {
            1 => lists.into_iter().next().unwrap_or_default(),
            _ => intersect(&lists),
        };
        let results = dedupe_by_id(combined);

        if !results.is_empty() {
            debug!(meals = results.len(), "search succeeded");
            return SearchState::Succeeded(results);
        }

        self.correction_flow(filters)
    }

    /// Resolve every active filter concurrently; fail-fast joint wait.
    ///
    /// Ingredient lists are intersected among themselves first, so the
    /// combined ingredient list counts as one list in the final reduction
    /// alongside category and area.
    async fn fetch_filter_lists(
        &self,
        filters: &FilterSet,
    ) -> GatewayResult<Vec<Vec<MealSummary>>> {
        let mut ingredient_tasks = Vec::with_capacity(filters.ingredients.len());
        for term in &filters.ingredients {
            let ctx = Arc::clone(&self.ctx);
            let term = term.clone();
            ingredient_tasks.push(tokio::spawn(async move {
                ctx.resolve(FilterKind::Ingredient, &term).await
            }));
        }

        let category_task = filters.category.clone().map(|category| {
            let ctx = Arc::clone(&self.ctx);
            tokio::spawn(async move { ctx.resolve(FilterKind::Category, &category).await })
        });
        let area_task = filters.area.clone().map(|area| {
            let ctx = Arc::clone(&self.ctx);
            tokio::spawn(async move { ctx.resolve(FilterKind::Area, &area).await })
        });

        let mut ingredient_lists = Vec::with_capacity(ingredient_tasks.len());
        for task in ingredient_tasks {
            ingredient_lists.push(settle(task.await)?);
        }

        let mut lists = Vec::new();
        if !ingredient_lists.is_empty() {
            lists.push(intersect(&ingredient_lists));
        }
        if let Some(task) = category_task {
            lists.push(settle(task.await)?);
        }
        if let Some(task) = area_task {
            lists.push(settle(task.await)?);
        }
        Ok(lists)
    }

    /// Zero matches: look for a "did you mean" candidate.
    ///
    /// Only the free-text ingredient input is corrected, never the
    /// categorical filters.
    fn correction_flow(&self, filters: &FilterSet) -> SearchState {
        let query = filters.raw_query();
        let pool = self.ctx.candidate_pool();

        match best_correction(query, &pool, &self.ctx.config().suggest) {
            Some(suggestion) => {
                debug!(query, suggestion, "zero matches, surfacing correction");
                SearchState::EmptyWithSuggestion {
                    query: query.to_string(),
                    suggestion,
                }
            }
            None => SearchState::EmptyNoSuggestion,
        }
    }
}

/// Unwrap a joined fetch task, folding panics into the gateway error path.
fn settle<T>(
    joined: Result<GatewayResult<T>, tokio::task::JoinError>,
) -> GatewayResult<T> {
    match joined {
        Ok(result) => result,
        Err(err) => Err(mealdex_core::GatewayError::transport(format!(
            "fetch task failed: {err}"
        ))),
    }
}

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::testing::FakeGateway;

    fn meal(id: &str, name: &str) -> MealSummary {
        MealSummary {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail_url: None,
        }
    }

    fn session(gateway: FakeGateway) -> SearchSession<FakeGateway> {
        SearchSession::new(SearchContext::shared(gateway, SessionConfig::default()))
    }

    #[tokio::test]
    async fn single_ingredient_search_succeeds() {
        let gateway = FakeGateway::new()
            .with_ingredient("chicken", vec![meal("1", "Piri Piri"), meal("2", "Korma")]);
        let session = session(gateway);

        let state = session.search(&FilterSet::parse("chicken")).await;
        let results = state.results().expect("should succeed");
        assert_eq!(results.len(), 2);
        assert_eq!(session.page(), 1);
        assert_eq!(session.state(), state);
    }

    #[tokio::test]
    async fn two_ingredients_are_and_combined() {
        let gateway = FakeGateway::new()
            .with_ingredient(
                "chicken",
                vec![meal("1", "A"), meal("2", "B"), meal("3", "C")],
            )
            .with_ingredient(
                "garlic",
                vec![meal("2", "B"), meal("3", "C"), meal("4", "D")],
            );
        let session = session(gateway);

        let state = session.search(&FilterSet::parse("chicken, garlic")).await;
        let results = state.results().expect("should succeed");
        let ids: Vec<&str> = results.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[tokio::test]
    async fn ingredients_and_category_and_area_all_constrain() {
        let gateway = FakeGateway::new()
            .with_ingredient("chicken", vec![meal("1", "A"), meal("2", "B")])
            .with_category("Chicken", vec![meal("2", "B"), meal("3", "C")])
            .with_area("Indian", vec![meal("2", "B"), meal("1", "A")]);
        let session = session(gateway);

        let filters = FilterSet::parse("chicken")
            .with_category("Chicken")
            .with_area("Indian");
        let state = session.search(&filters).await;
        let results = state.results().expect("should succeed");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "2");
    }

    #[tokio::test]
    async fn empty_filters_fall_back_to_trending() {
        let gateway = FakeGateway::new()
            .with_random(vec![meal("7", "Poutine"), meal("8", "Bigos")]);
        let ctx = SearchContext::shared(gateway, SessionConfig::default().with_trending_picks(2));
        ctx.refresh_trending().await;
        let session = SearchSession::new(Arc::clone(&ctx));

        let state = session.search(&FilterSet::parse("")).await;
        let results = state.results().expect("trending fallback succeeds");
        assert_eq!(results, ctx.trending());
    }

    #[tokio::test]
    async fn zero_matches_with_typo_surfaces_correction() {
        let gateway = FakeGateway::new()
            .with_ingredient("chiken", vec![])
            .with_random(vec![
                meal("1", "chicken curry"),
                meal("2", "chicken"),
                meal("3", "rice"),
            ]);
        let ctx = SearchContext::shared(gateway, SessionConfig::default().with_trending_picks(3));
        ctx.refresh_trending().await;
        let session = SearchSession::new(ctx);

        let state = session.search(&FilterSet::parse("chiken")).await;
        match state {
            SearchState::EmptyWithSuggestion { query, suggestion } => {
                assert_eq!(query, "chiken");
                assert_eq!(suggestion, "chicken");
            }
            other => panic!("expected a correction, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn zero_matches_without_close_candidate() {
        let gateway = FakeGateway::new().with_ingredient("xqzzy", vec![]);
        let session = session(gateway);

        let state = session.search(&FilterSet::parse("xqzzy")).await;
        assert_eq!(state, SearchState::EmptyNoSuggestion);
    }

    #[tokio::test]
    async fn correction_is_never_the_failed_term_itself() {
        // the pool knows "chicken" but the search for it found nothing
        let gateway = FakeGateway::new()
            .with_ingredient("chicken", vec![])
            .with_random(vec![meal("1", "chicken")]);
        let ctx = SearchContext::shared(gateway, SessionConfig::default().with_trending_picks(1));
        ctx.refresh_trending().await;
        let session = SearchSession::new(ctx);

        let state = session.search(&FilterSet::parse("chicken")).await;
        assert_eq!(state, SearchState::EmptyNoSuggestion);
    }

    #[tokio::test]
    async fn one_failing_fetch_fails_the_whole_search() {
        let gateway = FakeGateway::new()
            .with_ingredient("chicken", vec![meal("1", "A")])
            .with_failing_ingredient("garlic");
        let session = session(gateway);

        let state = session.search(&FilterSet::parse("chicken, garlic")).await;
        assert_eq!(state, SearchState::Failed);
        assert!(state.results().is_none());
    }

    #[tokio::test]
    async fn repeat_search_hits_the_cache() {
        let gateway = FakeGateway::new().with_ingredient("chicken", vec![meal("1", "A")]);
        let calls = gateway.call_counter();
        let session = session(gateway);

        session.search(&FilterSet::parse("chicken")).await;
        session.search(&FilterSet::parse("Chicken")).await;

        assert_eq!(calls.count("ingredient:chicken"), 1);
    }

    #[tokio::test]
    async fn failed_fetch_retries_on_next_search() {
        let gateway = FakeGateway::new()
            .with_ingredient("chicken", vec![meal("1", "A")])
            .with_failing_ingredient("chicken");
        let unfail = gateway.failure_switch();
        let session = session(gateway);

        assert_eq!(
            session.search(&FilterSet::parse("chicken")).await,
            SearchState::Failed
        );

        unfail.clear();
        let state = session.search(&FilterSet::parse("chicken")).await;
        assert!(state.results().is_some());
    }

    #[tokio::test]
    async fn duplicate_ids_in_a_list_are_collapsed() {
        let gateway = FakeGateway::new().with_ingredient(
            "rice",
            vec![meal("1", "stale"), meal("2", "B"), meal("1", "fresh")],
        );
        let session = session(gateway);

        let state = session.search(&FilterSet::parse("rice")).await;
        let results = state.results().expect("should succeed");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "fresh");
    }

    #[tokio::test]
    async fn stale_settlement_does_not_overwrite_newer_state() {
        let gateway = FakeGateway::new().with_ingredient("chicken", vec![meal("1", "A")]);
        let session = session(gateway);

        // a newer invocation begins before the older one settles
        let older = session.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let newer = session.latest.fetch_add(1, Ordering::SeqCst) + 1;

        session.publish_if_current(older, SearchState::Failed);
        assert_eq!(session.state(), SearchState::Idle);

        session.publish_if_current(newer, SearchState::EmptyNoSuggestion);
        assert_eq!(session.state(), SearchState::EmptyNoSuggestion);
    }

    #[tokio::test]
    async fn stale_success_does_not_reset_the_page() {
        let session = session(FakeGateway::new());
        session.set_page(5);

        let older = session.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let newer = session.latest.fetch_add(1, Ordering::SeqCst) + 1;

        session.publish_if_current(older, SearchState::Succeeded(vec![meal("1", "A")]));
        assert_eq!(session.page(), 5);
        assert_eq!(session.state(), SearchState::Idle);

        session.publish_if_current(newer, SearchState::Succeeded(vec![meal("1", "A")]));
        assert_eq!(session.page(), 1);
    }
}
