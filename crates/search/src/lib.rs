//! Fuzzy matching and query suggestions for Mealdex.
//!
//! This crate provides:
//! - Case-folded Levenshtein edit distance
//! - Length-normalized match scoring (lower is better)
//! - Ranked live suggestions and single "did you mean" corrections
//! - Candidate pool assembly with a fixed fallback vocabulary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod fuzzy;
mod pool;
mod score;
mod suggest;

pub use fuzzy::levenshtein;
pub use pool::{CandidatePool, FALLBACK_TERMS};
pub use score::score;
pub use suggest::{best_correction, suggest, SuggestConfig};
