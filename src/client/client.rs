//! Catalog HTTP client.
//!
//! One `reqwest` client with a warm connection pool is shared by every
//! request; the RapidAPI credential headers are stacked onto each GET.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, Response};

use crate::config::CatalogConfig;
use crate::error::CarHubError;

/// Main client to interact with the vehicle catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /* ───────────────────────── Public configuration ───────────────────────── */
    pub base_url: String,
    /// Sent as `X-RapidAPI-Key` on every request. May be empty.
    pub api_key: String,
    /// Sent as `X-RapidAPI-Host` on every request.
    pub api_host: String,

    /* ───────────────────────── Internal plumbing ──────────────────────────── */
    pub http: Client,
}

impl CatalogClient {
    /// Construct a new [`CatalogClient`] from explicit configuration.
    pub fn new(config: CatalogConfig) -> Self {
        let http = ClientBuilder::new()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .use_rustls_tls()
            .build()
            .expect("Failed to build reqwest client");

        Self {
            base_url: config.base_url,
            api_key: config.api_key,
            api_host: config.api_host,
            http,
        }
    }

    /// Construct a client configured from the process environment.
    pub fn from_env() -> Self {
        Self::new(CatalogConfig::from_env())
    }

    /* ───────────── Convenience wrapper around HTTP GET ───────────── */

    /// Issue a GET with the RapidAPI credential headers attached.
    pub async fn api_get(&self, url: &str) -> Result<Response, CarHubError> {
        self.http
            .get(url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .send()
            .await
            .map_err(CarHubError::Http)
    }
}

/// Parse the body as JSON **iff** the response status is success.
pub async fn parse_json_if_ok<T: serde::de::DeserializeOwned>(
    resp: Response,
) -> Result<T, CarHubError> {
    let status = resp.status();
    let bytes = resp.bytes().await.map_err(CarHubError::Http)?;

    if !status.is_success() {
        return Err(CarHubError::HttpStatus {
            code: status.as_u16(),
            body: String::from_utf8_lossy(&bytes).to_string(),
        });
    }

    serde_json::from_slice::<T>(&bytes).map_err(CarHubError::Json)
}
