//! Data model for the meal catalog
//!
//! Records are immutable once produced by the gateway; identity is the opaque
//! `id` string assigned by the remote source.

use serde::{Deserialize, Serialize};

/// A meal as returned by filter, list, and random calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    /// Opaque stable id from the remote source
    pub id: String,
    /// Display name
    pub name: String,
    /// Thumbnail image URL, when the source provides one
    pub thumbnail_url: Option<String>,
}

/// One ingredient entry of a meal, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Ingredient name, never blank
    pub name: String,
    /// Quantity text, when the source provides one
    pub measure: Option<String>,
}

/// Full meal record, fetched lazily on detail-view request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDetail {
    /// Opaque stable id from the remote source
    pub id: String,
    /// Display name
    pub name: String,
    /// Thumbnail image URL
    pub thumbnail_url: Option<String>,
    /// Category name, e.g. "Seafood"
    pub category: Option<String>,
    /// Cuisine/area name, e.g. "Italian"
    pub area: Option<String>,
    /// Preparation instructions
    pub instructions: Option<String>,
    /// Link to the original recipe
    pub source_url: Option<String>,
    /// Link to a preparation video
    pub video_url: Option<String>,
    /// Ordered ingredient lines, blank slots already skipped
    pub ingredients: Vec<IngredientLine>,
}

impl MealDetail {
    /// The summary view of this record.
    #[must_use]
    pub fn summary(&self) -> MealSummary {
        MealSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
        }
    }
}

/// The active query: free-text ingredient terms plus optional categorical
/// filters.
///
/// An empty filter set is a distinguished state meaning "use the trending
/// fallback", not "match everything".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Ingredient terms, trimmed and lower-cased, in input order
    pub ingredients: Vec<String>,
    /// Single category filter
    pub category: Option<String>,
    /// Single cuisine/area filter
    pub area: Option<String>,
    /// The free-text input as typed, used for "did you mean" corrections
    raw_query: String,
}

impl FilterSet {
    /// Build a filter set from free-text ingredient input.
    ///
    /// The text is comma-split; terms are trimmed and lower-cased, empty
    /// terms dropped. The raw text is retained for the correction flow.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let ingredients = query
            .split(',')
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();

        Self {
            ingredients,
            category: None,
            area: None,
            raw_query: query.trim().to_string(),
        }
    }

    /// Add a category filter.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into().trim().to_string();
        self.category = (!category.is_empty()).then_some(category);
        self
    }

    /// Add a cuisine/area filter.
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        let area = area.into().trim().to_string();
        self.area = (!area.is_empty()).then_some(area);
        self
    }

    /// The free-text input as typed, trimmed.
    #[must_use]
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// True when no ingredient, category, or area filter is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.category.is_none() && self.area.is_none()
    }
}
