use async_recursion::async_recursion;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, warn};

use crate::{
    client::{parse_json_if_ok, CatalogClient},
    error::CarHubError,
    types::FilterCriteria,
    util::build_url,
};

/// Trait that holds the methods for catalog endpoints.
#[async_trait]
pub trait CatalogApi {
    /// Fetch vehicle records matching `filters`.
    ///
    /// Best-effort: any transport, status or decode failure is logged and
    /// collapsed to `None`, which callers treat as "no data available". The
    /// payload is handed back unvalidated; see
    /// [`VehicleRecord::list_from_value`](crate::types::VehicleRecord::list_from_value)
    /// for the typed decode.
    async fn fetch_catalog(&self, filters: &FilterCriteria) -> Option<Value>;

    /// Like `fetch_catalog`, but surfaces the failure reason.
    async fn try_fetch_catalog(&self, filters: &FilterCriteria) -> Result<Value, CarHubError>;
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn fetch_catalog(&self, filters: &FilterCriteria) -> Option<Value> {
        match self.try_fetch_catalog(filters).await {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Error fetching car data: {e}");
                None
            }
        }
    }

    async fn try_fetch_catalog(&self, filters: &FilterCriteria) -> Result<Value, CarHubError> {
        fetch_with_fallback(self, filters, true).await
    }
}

/// One catalog round trip.
///
/// When the endpoint answers with an empty array and `allow_fallback` is
/// set, the query is retried with [`FilterCriteria::fallback`]; the retry
/// runs with the flag cleared, so at most one fallback happens per
/// top-level call and a second empty result is returned as-is.
#[async_recursion]
async fn fetch_with_fallback(
    client: &CatalogClient,
    filters: &FilterCriteria,
    allow_fallback: bool,
) -> Result<Value, CarHubError> {
    let mut url = build_url(&client.base_url, &["v1", "cars"]);
    let query = filters.to_query();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }

    let resp = client.api_get(&url).await?;
    let value: Value = parse_json_if_ok(resp).await?;

    if allow_fallback && value.as_array().is_some_and(|records| records.is_empty()) {
        warn!("Empty response received. Fetching general data...");
        return fetch_with_fallback(client, &FilterCriteria::fallback(), false).await;
    }

    Ok(value)
}
