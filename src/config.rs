//! Process-level configuration for the catalog and image-CDN integrations.
//!
//! Keys are read once at construction time. A missing variable is not an
//! error; the key defaults to the empty string and the upstream service
//! rejects the request instead.

use std::env;

/// Environment variable holding the RapidAPI key for the catalog endpoint.
pub const RAPID_API_KEY_VAR: &str = "RAPID_API_KEY";

/// Environment variable holding the imagin.studio customer key.
pub const IMAGIN_API_KEY_VAR: &str = "IMAGIN_API_KEY";

const CATALOG_BASE_URL: &str = "https://cars-by-api-ninjas.p.rapidapi.com";
const CATALOG_API_HOST: &str = "cars-by-api-ninjas.p.rapidapi.com";

/// Settings for [`CatalogClient`](crate::client::CatalogClient).
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// REST endpoint, without the `/v1/cars` path.
    pub base_url: String,
    /// Value sent as `X-RapidAPI-Key`. Empty when unconfigured.
    pub api_key: String,
    /// Value sent as `X-RapidAPI-Host`.
    pub api_host: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: CATALOG_BASE_URL.to_string(),
            api_key: String::new(),
            api_host: CATALOG_API_HOST.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Read the catalog configuration from the process environment,
    /// loading a `.env` file first if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            api_key: env::var(RAPID_API_KEY_VAR).unwrap_or_default(),
            ..Self::default()
        }
    }
}

/// Settings for [`generate_car_image_url`](crate::images::generate_car_image_url).
#[derive(Debug, Clone, Default)]
pub struct ImageCdnConfig {
    /// Value sent as the `customer` query parameter. Empty when unconfigured.
    pub customer_key: String,
}

impl ImageCdnConfig {
    /// Read the CDN customer key from the process environment,
    /// loading a `.env` file first if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            customer_key: env::var(IMAGIN_API_KEY_VAR).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_rapidapi() {
        let cfg = CatalogConfig::default();
        assert_eq!(cfg.base_url, "https://cars-by-api-ninjas.p.rapidapi.com");
        assert_eq!(cfg.api_host, "cars-by-api-ninjas.p.rapidapi.com");
        assert!(cfg.api_key.is_empty());
    }
}
