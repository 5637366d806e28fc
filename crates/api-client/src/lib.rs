//! HTTP gateway to the public meal database
//!
//! This crate is the only place that knows the remote API's URL shapes and
//! wire-record field names. It exposes a [`MealDbClient`] implementing the
//! `MealGateway` trait from `mealdex-core`:
//!
//! - **Environment-based configuration**: base URL and timeout from env vars
//! - **Uniform failures**: transport, status, and decode errors all normalize
//!   into `GatewayError`
//! - **Validated records**: malformed remote records are dropped at this
//!   boundary instead of propagating inward
//!
//! # Example
//!
//! ```rust,no_run
//! use mealdex_api_client::MealDbClient;
//! use mealdex_core::MealGateway;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MealDbClient::new()?;
//!     let meals = client.filter_by_ingredient("chicken").await?;
//!     println!("{} meals use chicken", meals.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod records;

pub use client::MealDbClient;
pub use config::ClientConfig;
