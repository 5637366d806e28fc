//! Presentation helpers over a settled result list.

use mealdex_core::model::MealSummary;

/// How a result list is ordered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Alphabetical by meal name
    #[default]
    NameAsc,
    /// Reverse alphabetical by meal name
    NameDesc,
}

/// Sort a result list by name, case-insensitively. Stable, so meals with
/// identical names keep their relative order.
pub fn sort_by_name(meals: &mut [MealSummary], order: SortOrder) {
    meals.sort_by(|a, b| {
        let ordering = a.name.to_lowercase().cmp(&b.name.to_lowercase());
        match order {
            SortOrder::NameAsc => ordering,
            SortOrder::NameDesc => ordering.reverse(),
        }
    });
}

/// One 1-based page of a result list.
///
/// A page past the end is empty; page 0 is treated as page 1. `per_page`
/// of zero yields an empty page.
#[must_use]
pub fn page(meals: &[MealSummary], page: usize, per_page: usize) -> &[MealSummary] {
    if per_page == 0 {
        return &[];
    }
    let start = page.max(1).saturating_sub(1).saturating_mul(per_page);
    if start >= meals.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(meals.len());
    &meals[start..end]
}

/// Total pages needed for a list, at least 1.
#[must_use]
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page).max(1)
}
