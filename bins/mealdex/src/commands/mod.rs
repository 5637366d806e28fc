//! CLI command implementations

pub mod browse;
pub mod detail;
pub mod fav;
pub mod search;
pub mod suggest;
