//! Gateway seam for the remote meal database
//!
//! The session crate depends on this trait, not on the HTTP client, so the
//! orchestrator can be exercised against an in-memory fake. Methods return
//! `impl Future + Send` so fetches can be spawned concurrently.

use crate::error::GatewayResult;
use crate::model::{MealDetail, MealSummary};
use std::future::Future;

/// One operation per remote query shape.
///
/// Every operation maps to a single HTTP GET against the meal database. A
/// result of `Ok(vec![])` means "zero matches"; transport and decoding
/// failures are reported as [`crate::GatewayError`] and must never be
/// conflated with an empty list.
pub trait MealGateway: Send + Sync {
    /// Meals that use the given ingredient.
    fn filter_by_ingredient(
        &self,
        term: &str,
    ) -> impl Future<Output = GatewayResult<Vec<MealSummary>>> + Send;

    /// Meals in the given category.
    fn filter_by_category(
        &self,
        category: &str,
    ) -> impl Future<Output = GatewayResult<Vec<MealSummary>>> + Send;

    /// Meals from the given cuisine/area.
    fn filter_by_area(
        &self,
        area: &str,
    ) -> impl Future<Output = GatewayResult<Vec<MealSummary>>> + Send;

    /// All known category names.
    fn list_categories(&self) -> impl Future<Output = GatewayResult<Vec<String>>> + Send;

    /// All known cuisine/area names.
    fn list_areas(&self) -> impl Future<Output = GatewayResult<Vec<String>>> + Send;

    /// Full record for one meal, `None` when the id is unknown.
    fn lookup_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = GatewayResult<Option<MealDetail>>> + Send;

    /// One randomly chosen meal.
    fn random_pick(&self) -> impl Future<Output = GatewayResult<MealSummary>> + Send;
}
