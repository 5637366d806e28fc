//! Configuration for the meal database client
//!
//! Supports environment-based configuration with sensible defaults.

use mealdex_core::error::{GatewayError, GatewayResult};
use std::env;
use std::time::Duration;

/// Default public meal database endpoint
const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the meal database API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `MEALDEX_API_URL`: base URL of the meal database API
    /// - `MEALDEX_TIMEOUT_SECS`: request timeout in seconds
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("MEALDEX_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = env::var("MEALDEX_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map_or(Duration::from_secs(15), Duration::from_secs);

        Self { base_url, timeout }
    }

    /// Builder-style method to set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> GatewayResult<()> {
        if self.base_url.is_empty() {
            return Err(GatewayError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(GatewayError::config(
                "base_url must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(GatewayError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}
