//! AND-combination of filtered result lists.

use mealdex_core::model::MealSummary;
use std::collections::{HashMap, HashSet};

/// Meals present, by id, in every input list.
///
/// Element identity (the full record) and ordering come from the first list.
/// Zero input lists yield an empty result; the caller must treat "no filters
/// active" separately and never pass zero lists meaning "match all". One
/// input list is returned as-is.
#[must_use]
pub fn intersect(lists: &[Vec<MealSummary>]) -> Vec<MealSummary> {
    let Some((first, rest)) = lists.split_first() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return first.clone();
    }

    let mut surviving: HashSet<&str> = first.iter().map(|meal| meal.id.as_str()).collect();
    for list in rest {
        let ids: HashSet<&str> = list.iter().map(|meal| meal.id.as_str()).collect();
        surviving.retain(|id| ids.contains(id));
        if surviving.is_empty() {
            return Vec::new();
        }
    }

    first
        .iter()
        .filter(|meal| surviving.contains(meal.id.as_str()))
        .cloned()
        .collect()
}

/// Collapse duplicate ids, keeping first-seen order and the last record seen
/// for each id.
#[must_use]
pub fn dedupe_by_id(meals: Vec<MealSummary>) -> Vec<MealSummary> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<MealSummary> = Vec::with_capacity(meals.len());

    for meal in meals {
        match position.get(&meal.id) {
            Some(&index) => deduped[index] = meal,
            None => {
                position.insert(meal.id.clone(), deduped.len());
                deduped.push(meal);
            }
        }
    }

    deduped
}
