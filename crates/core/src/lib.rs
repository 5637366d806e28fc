//! Core types for the Mealdex recipe browser
//!
//! This crate provides the shared foundation used by the search, gateway,
//! and session crates:
//!
//! - **Data model**: meal summaries and details, ingredient lines, filter sets
//! - **Error taxonomy**: gateway, storage, and session errors
//! - **Gateway seam**: the `MealGateway` trait implemented by the HTTP client
//!   and by test fakes
//! - **Favorites storage**: a key-value store abstraction with in-memory and
//!   JSON-file implementations
//!
//! # Example
//!
//! ```rust
//! use mealdex_core::model::FilterSet;
//!
//! let filters = FilterSet::parse("Chicken, garlic").with_category("Seafood");
//! assert_eq!(filters.ingredients, vec!["chicken", "garlic"]);
//! assert!(!filters.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod gateway;
pub mod model;
pub mod storage;

pub use error::{GatewayError, GatewayResult, SessionError, StorageError};
pub use gateway::MealGateway;
pub use model::{FilterSet, IngredientLine, MealDetail, MealSummary};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{GatewayError, GatewayResult, SessionError, StorageError};
    pub use crate::gateway::MealGateway;
    pub use crate::model::{FilterSet, IngredientLine, MealDetail, MealSummary};
    pub use crate::storage::{Favorites, JsonFileStore, KeyValueStore, MemoryStore};
}
