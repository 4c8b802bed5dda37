//! Catalog service configuration

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;

use crate::models::ItemId;

/// Address used when `CATALOG_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com/products";

const DEFAULT_USER_AGENT: &str = concat!("catalog-browser/", env!("CARGO_PKG_VERSION"));

/// Where and how to reach the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Collection endpoint; single items live one path segment below it
    pub base_url: Url,
    /// Upper bound for one request. `None` waits as long as the service does
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl CatalogConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid catalog base URL: {base_url}"))?;

        if base_url.cannot_be_a_base() {
            anyhow::bail!("Catalog base URL cannot carry path segments: {base_url}");
        }

        Ok(Self {
            base_url,
            request_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Reads `CATALOG_BASE_URL` and `CATALOG_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("CATALOG_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = std::env::var("CATALOG_TIMEOUT_SECS").ok();

        Self::from_values(&base_url, timeout.as_deref())
    }

    fn from_values(base_url: &str, timeout_secs: Option<&str>) -> Result<Self> {
        let mut config = Self::new(base_url)?;

        if let Some(raw) = timeout_secs {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("CATALOG_TIMEOUT_SECS is not a number: {raw}"))?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn collection_url(&self) -> Url {
        self.base_url.clone()
    }

    pub fn item_url(&self, id: ItemId) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&id.to_string());
        }
        url
    }
}
