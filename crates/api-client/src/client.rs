//! Meal database client implementation

use crate::config::ClientConfig;
use crate::records::{AreaRecord, CategoryRecord, DetailRecord, MealsEnvelope, SummaryRecord};
use mealdex_core::error::{GatewayError, GatewayResult};
use mealdex_core::gateway::MealGateway;
use mealdex_core::model::{MealDetail, MealSummary};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// HTTP client for the public meal database.
///
/// Each gateway operation issues one GET against a fixed endpoint and parses
/// the `{ "meals": [...] | null }` envelope. A null payload is "zero
/// matches", never an error; transport, status, and decode failures are
/// normalized into [`GatewayError`].
#[derive(Clone)]
pub struct MealDbClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl MealDbClient {
    /// Create a new client with configuration from the environment.
    pub fn new() -> GatewayResult<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Create a new client with specific configuration.
    pub fn with_config(config: ClientConfig) -> GatewayResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static("mealdex/0.3"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| GatewayError::transport(e.to_string()))?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue one GET and decode the meals envelope.
    ///
    /// Query parameters are passed as pairs so reqwest percent-encodes them.
    #[instrument(skip(self), fields(request_id))]
    async fn fetch_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> GatewayResult<Vec<T>> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        let request_id = Uuid::new_v4().to_string();

        let response = self
            .inner
            .get(&url)
            .query(query)
            .header(X_REQUEST_ID, &request_id)
            .send()
            .await
            .map_err(|e| GatewayError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unreadable response body".to_string());
            warn!(
                request_id = %request_id,
                url = %url,
                status = status.as_u16(),
                "meal database answered with a non-success status"
            );
            return Err(GatewayError::status(status.as_u16(), message));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::transport(e.to_string()))?;
        let envelope: MealsEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| GatewayError::decode(e.to_string()))?;

        let meals = envelope.into_meals();
        debug!(
            request_id = %request_id,
            url = %url,
            records = meals.len(),
            "meal database request succeeded"
        );
        Ok(meals)
    }

    async fn fetch_summaries(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> GatewayResult<Vec<MealSummary>> {
        let records: Vec<SummaryRecord> = self.fetch_envelope(path, query).await?;
        Ok(collect_valid(records, SummaryRecord::into_summary))
    }
}

impl MealGateway for MealDbClient {
    async fn filter_by_ingredient(&self, term: &str) -> GatewayResult<Vec<MealSummary>> {
        self.fetch_summaries("filter.php", &[("i", term)]).await
    }

    async fn filter_by_category(&self, category: &str) -> GatewayResult<Vec<MealSummary>> {
        self.fetch_summaries("filter.php", &[("c", category)]).await
    }

    async fn filter_by_area(&self, area: &str) -> GatewayResult<Vec<MealSummary>> {
        self.fetch_summaries("filter.php", &[("a", area)]).await
    }

    async fn list_categories(&self) -> GatewayResult<Vec<String>> {
        let records: Vec<CategoryRecord> =
            self.fetch_envelope("list.php", &[("c", "list")]).await?;
        Ok(records.into_iter().filter_map(CategoryRecord::into_name).collect())
    }

    async fn list_areas(&self) -> GatewayResult<Vec<String>> {
        let records: Vec<AreaRecord> = self.fetch_envelope("list.php", &[("a", "list")]).await?;
        Ok(records.into_iter().filter_map(AreaRecord::into_name).collect())
    }

    async fn lookup_by_id(&self, id: &str) -> GatewayResult<Option<MealDetail>> {
        let records: Vec<DetailRecord> = self.fetch_envelope("lookup.php", &[("i", id)]).await?;
        Ok(records.into_iter().find_map(DetailRecord::into_detail))
    }

    async fn random_pick(&self) -> GatewayResult<MealSummary> {
        let records: Vec<DetailRecord> = self.fetch_envelope("random.php", &[]).await?;
        records
            .into_iter()
            .find_map(DetailRecord::into_detail)
            .map(|detail| detail.summary())
            .ok_or_else(|| GatewayError::decode("random.php returned no meal record"))
    }
}

/// Convert wire records, dropping the malformed ones with a warning.
fn collect_valid<R, T>(records: Vec<R>, convert: impl Fn(R) -> Option<T>) -> Vec<T> {
    let total = records.len();
    let valid: Vec<T> = records.into_iter().filter_map(convert).collect();
    if valid.len() < total {
        warn!(
            dropped = total - valid.len(),
            "dropped malformed records from meal database response"
        );
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_with_default_config() {
        let client = MealDbClient::with_config(ClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn client_creation_rejects_invalid_config() {
        let config = ClientConfig::default().with_base_url("not-a-url");
        assert!(MealDbClient::with_config(config).is_err());
    }

    #[test]
    fn collect_valid_drops_malformed_records() {
        let records = vec![
            SummaryRecord {
                id: Some("1".to_string()),
                name: Some("Kedgeree".to_string()),
                thumbnail: None,
            },
            SummaryRecord {
                id: None,
                name: Some("No Id".to_string()),
                thumbnail: None,
            },
            SummaryRecord {
                id: Some("3".to_string()),
                name: Some("".to_string()),
                thumbnail: None,
            },
        ];

        let valid = collect_valid(records, SummaryRecord::into_summary);
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].id, "1");
    }
}
