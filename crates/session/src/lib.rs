//! Search orchestration for the Mealdex recipe browser
//!
//! This crate combines the gateway, the per-filter result cache, the set
//! intersection engine, and the fuzzy suggestion engine into one search
//! operation with well-defined fallback behavior:
//!
//! - **Trending fallback**: an empty filter set shows the trending list
//! - **AND-combination**: every active filter must match, by meal id
//! - **Correction flow**: a zero-result search may carry a single
//!   "did you mean" suggestion
//!
//! State lives in a [`SearchContext`] created at session start and discarded
//! at session end; nothing here is global.
//!
//! # Example
//!
//! ```rust,ignore
//! use mealdex_session::{SearchContext, SearchSession, SessionConfig};
//! use mealdex_core::model::FilterSet;
//!
//! let ctx = SearchContext::shared(gateway, SessionConfig::default());
//! ctx.refresh_trending().await;
//! let session = SearchSession::new(ctx);
//! let state = session.search(&FilterSet::parse("chicken, garlic")).await;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod config;
pub mod context;
pub mod intersect;
pub mod results;
pub mod search;

#[cfg(test)]
mod testing;

pub use cache::{FilterKind, ResultCache};
pub use config::SessionConfig;
pub use context::SearchContext;
pub use intersect::{dedupe_by_id, intersect};
pub use results::{page, page_count, sort_by_name, SortOrder};
pub use search::{SearchSession, SearchState};
