//! Wire records for the meal database API
//!
//! Every response is an envelope `{ "meals": [...] | null }`. Field names
//! follow the remote `idMeal` / `strMeal` convention; records are validated
//! and converted into the core model here, at the gateway boundary. Records
//! with a blank id or name are malformed and get dropped by the caller.

use mealdex_core::model::{IngredientLine, MealDetail, MealSummary};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Number of indexed ingredient/measure slot pairs in a full record
pub const INGREDIENT_SLOTS: usize = 20;

/// Response envelope; a null or absent `meals` payload means "zero matches".
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope<T> {
    /// The payload list, null when nothing matched
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    /// The payload with null normalized to an empty list.
    #[must_use]
    pub fn into_meals(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// A meal as returned by filter and summary calls.
#[derive(Debug, Deserialize)]
pub struct SummaryRecord {
    /// Remote meal id
    #[serde(rename = "idMeal")]
    pub id: Option<String>,
    /// Meal name
    #[serde(rename = "strMeal")]
    pub name: Option<String>,
    /// Thumbnail URL
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
}

impl SummaryRecord {
    /// Validate and convert into the core model.
    ///
    /// Returns `None` for records with a blank id or name.
    #[must_use]
    pub fn into_summary(self) -> Option<MealSummary> {
        let id = non_blank(self.id)?;
        let name = non_blank(self.name)?;
        Some(MealSummary {
            id,
            name,
            thumbnail_url: non_blank(self.thumbnail),
        })
    }
}

/// A full meal record as returned by lookup and random calls.
///
/// The numbered `strIngredientN` / `strMeasureN` slots are collected through
/// the flattened map rather than twenty named fields.
#[derive(Debug, Deserialize)]
pub struct DetailRecord {
    /// Remote meal id
    #[serde(rename = "idMeal")]
    pub id: Option<String>,
    /// Meal name
    #[serde(rename = "strMeal")]
    pub name: Option<String>,
    /// Thumbnail URL
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    /// Category name
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    /// Cuisine/area name
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    /// Preparation instructions
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    /// Source link
    #[serde(rename = "strSource")]
    pub source: Option<String>,
    /// Video link
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    /// Remaining fields, including the numbered ingredient/measure slots
    #[serde(flatten)]
    pub slots: BTreeMap<String, Option<String>>,
}

impl DetailRecord {
    /// Validate and convert into the core model.
    ///
    /// Returns `None` for records with a blank id or name. Ingredient lines
    /// preserve slot order; slots with a blank name are skipped.
    #[must_use]
    pub fn into_detail(mut self) -> Option<MealDetail> {
        let id = non_blank(self.id.take())?;
        let name = non_blank(self.name.take())?;

        let mut ingredients = Vec::new();
        for i in 1..=INGREDIENT_SLOTS {
            let Some(ingredient) = self.slot("strIngredient", i) else {
                continue;
            };
            let measure = self.slot("strMeasure", i);
            ingredients.push(IngredientLine {
                name: ingredient,
                measure,
            });
        }

        Some(MealDetail {
            id,
            name,
            thumbnail_url: non_blank(self.thumbnail),
            category: non_blank(self.category),
            area: non_blank(self.area),
            instructions: non_blank(self.instructions),
            source_url: non_blank(self.source),
            video_url: non_blank(self.youtube),
            ingredients,
        })
    }

    fn slot(&self, prefix: &str, index: usize) -> Option<String> {
        let value = self.slots.get(&format!("{prefix}{index}"))?.clone();
        non_blank(value)
    }
}

/// One entry of the category list.
#[derive(Debug, Deserialize)]
pub struct CategoryRecord {
    /// Category name
    #[serde(rename = "strCategory")]
    pub name: Option<String>,
}

impl CategoryRecord {
    /// The category name, `None` when blank.
    #[must_use]
    pub fn into_name(self) -> Option<String> {
        non_blank(self.name)
    }
}

/// One entry of the area list.
#[derive(Debug, Deserialize)]
pub struct AreaRecord {
    /// Cuisine/area name
    #[serde(rename = "strArea")]
    pub name: Option<String>,
}

impl AreaRecord {
    /// The area name, `None` when blank.
    #[must_use]
    pub fn into_name(self) -> Option<String> {
        non_blank(self.name)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
