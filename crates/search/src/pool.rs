//! Suggestion candidate pools.
//!
//! A pool is an ephemeral, deduplicated list of terms assembled on demand
//! from whatever vocabulary the session currently knows: trending meal names,
//! category and area names, ingredient keys already searched, and a small
//! fixed fallback list so a fresh session still has something to suggest.

use std::collections::HashSet;

/// Fixed fallback vocabulary merged into every pool.
pub const FALLBACK_TERMS: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "lamb",
    "salmon",
    "pasta",
    "rice",
    "garlic",
    "onion",
    "tomato",
    "potato",
    "cheese",
    "egg",
    "lemon",
    "chocolate",
    "dessert",
    "vegetarian",
    "seafood",
    "breakfast",
    "soup",
];

/// Builder for a deduplicated candidate list.
///
/// Terms keep first-insertion order; duplicates are dropped
/// case-insensitively, so "Chicken" after "chicken" is ignored.
#[derive(Debug, Default)]
pub struct CandidatePool {
    terms: Vec<String>,
    seen: HashSet<String>,
}

impl CandidatePool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool pre-seeded with the fallback vocabulary.
    #[must_use]
    pub fn with_fallback() -> Self {
        let mut pool = Self::new();
        pool.extend(FALLBACK_TERMS.iter().copied());
        pool
    }

    /// Add one term; blank terms are ignored.
    pub fn add(&mut self, term: impl AsRef<str>) {
        let term = term.as_ref().trim();
        if term.is_empty() {
            return;
        }
        if self.seen.insert(term.to_lowercase()) {
            self.terms.push(term.to_string());
        }
    }

    /// Add every term of an iterator.
    pub fn extend<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            self.add(term);
        }
    }

    /// Number of distinct terms collected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when no terms have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Consume the pool into its ordered term list.
    #[must_use]
    pub fn into_terms(self) -> Vec<String> {
        self.terms
    }
}
