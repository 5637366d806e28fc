//! In-memory gateway double for session tests.

use mealdex_core::error::{GatewayError, GatewayResult};
use mealdex_core::gateway::MealGateway;
use mealdex_core::model::{MealDetail, MealSummary};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Per-endpoint call counts, shared with the test after the gateway moves
/// into the context.
#[derive(Debug, Default)]
pub struct CallCounter {
    counts: Mutex<HashMap<String, usize>>,
}

impl CallCounter {
    fn record(&self, key: &str) {
        let mut counts = self.counts.lock().unwrap();
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, key: &str) -> usize {
        self.counts.lock().unwrap().get(key).copied().unwrap_or(0)
    }
}

/// Shared handle for lifting injected failures mid-test.
#[derive(Debug, Default)]
pub struct FailureSwitch {
    failing: Mutex<HashSet<String>>,
}

impl FailureSwitch {
    fn arm(&self, term: &str) {
        self.failing.lock().unwrap().insert(term.to_lowercase());
    }

    fn is_armed(&self, term: &str) -> bool {
        self.failing.lock().unwrap().contains(&term.to_lowercase())
    }

    pub fn clear(&self) {
        self.failing.lock().unwrap().clear();
    }
}

/// Canned-response gateway. Unknown filter terms resolve to an empty list,
/// matching a remote "meals": null envelope.
#[derive(Debug, Default)]
pub struct FakeGateway {
    ingredients: HashMap<String, Vec<MealSummary>>,
    categories: HashMap<String, Vec<MealSummary>>,
    areas: HashMap<String, Vec<MealSummary>>,
    details: HashMap<String, MealDetail>,
    random: Vec<MealSummary>,
    next_random: AtomicUsize,
    failing_random_picks: AtomicUsize,
    failures: Arc<FailureSwitch>,
    calls: Arc<CallCounter>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ingredient(mut self, term: &str, meals: Vec<MealSummary>) -> Self {
        self.ingredients.insert(term.to_lowercase(), meals);
        self
    }

    pub fn with_category(mut self, name: &str, meals: Vec<MealSummary>) -> Self {
        self.categories.insert(name.to_lowercase(), meals);
        self
    }

    pub fn with_area(mut self, name: &str, meals: Vec<MealSummary>) -> Self {
        self.areas.insert(name.to_lowercase(), meals);
        self
    }

    pub fn with_detail(mut self, detail: MealDetail) -> Self {
        self.details.insert(detail.id.clone(), detail);
        self
    }

    /// Canned random picks, cycled through in order.
    pub fn with_random(mut self, meals: Vec<MealSummary>) -> Self {
        self.random = meals;
        self
    }

    /// Make the next `count` random picks fail, whichever tasks draw them.
    pub fn with_failing_random_picks(self, count: usize) -> Self {
        self.failing_random_picks.store(count, Ordering::SeqCst);
        self
    }

    /// Make ingredient fetches for this term fail until the switch clears.
    pub fn with_failing_ingredient(self, term: &str) -> Self {
        self.failures.arm(term);
        self
    }

    pub fn call_counter(&self) -> Arc<CallCounter> {
        Arc::clone(&self.calls)
    }

    pub fn failure_switch(&self) -> Arc<FailureSwitch> {
        Arc::clone(&self.failures)
    }

    fn lookup(
        &self,
        table: &HashMap<String, Vec<MealSummary>>,
        kind: &str,
        term: &str,
    ) -> GatewayResult<Vec<MealSummary>> {
        let term = term.to_lowercase();
        self.calls.record(&format!("{kind}:{term}"));
        if self.failures.is_armed(&term) {
            return Err(GatewayError::transport("injected failure"));
        }
        Ok(table.get(&term).cloned().unwrap_or_default())
    }
}

impl MealGateway for FakeGateway {
    async fn filter_by_ingredient(&self, term: &str) -> GatewayResult<Vec<MealSummary>> {
        self.lookup(&self.ingredients, "ingredient", term)
    }

    async fn filter_by_category(&self, name: &str) -> GatewayResult<Vec<MealSummary>> {
        self.lookup(&self.categories, "category", name)
    }

    async fn filter_by_area(&self, name: &str) -> GatewayResult<Vec<MealSummary>> {
        self.lookup(&self.areas, "area", name)
    }

    async fn list_categories(&self) -> GatewayResult<Vec<String>> {
        self.calls.record("list:categories");
        let mut names: Vec<String> = self.categories.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn list_areas(&self) -> GatewayResult<Vec<String>> {
        self.calls.record("list:areas");
        let mut names: Vec<String> = self.areas.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn lookup_by_id(&self, id: &str) -> GatewayResult<Option<MealDetail>> {
        self.calls.record(&format!("lookup:{id}"));
        Ok(self.details.get(id).cloned())
    }

    async fn random_pick(&self) -> GatewayResult<MealSummary> {
        self.calls.record("random");
        let drew_failure = self
            .failing_random_picks
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if drew_failure {
            return Err(GatewayError::transport("injected random failure"));
        }
        if self.random.is_empty() {
            return Err(GatewayError::decode("no random meals configured"));
        }
        let index = self.next_random.fetch_add(1, Ordering::SeqCst) % self.random.len();
        Ok(self.random[index].clone())
    }
}
