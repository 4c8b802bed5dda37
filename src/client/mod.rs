use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, info, instrument};

use crate::config::CatalogConfig;
use crate::error::FetchError;
use crate::models::{CatalogPage, ItemDetail, ItemId, ItemSummary};
use crate::traits::CatalogSource;

/// HTTP client for the catalog service
pub struct HttpCatalog {
    client: Client,
    config: CatalogConfig,
}

impl HttpCatalog {
    pub fn new(config: CatalogConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// GETs `url` and returns the raw body of a success response.
    async fn get_body(&self, url: Url) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::protocol(status.as_u16(), url.as_str()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;
        debug!(%url, bytes = body.len(), "Received catalog response");

        Ok(body.to_vec())
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    #[instrument(level = "debug", skip(self), err)]
    async fn fetch_catalog(&self) -> Result<Vec<ItemSummary>, FetchError> {
        let url = self.config.collection_url();
        info!("Fetching catalog from {}", url);

        let body = self.get_body(url).await?;
        let items = CatalogPage::parse(&body)?;

        info!("Fetched {} catalog items", items.len());
        Ok(items)
    }

    #[instrument(level = "debug", skip(self), err)]
    async fn fetch_item(&self, id: ItemId) -> Result<ItemDetail, FetchError> {
        let url = self.config.item_url(id);
        info!("Fetching item {} from {}", id, url);

        let body = self.get_body(url).await?;
        let detail = ItemDetail::parse(&body)?;

        if detail.id() != id {
            return Err(FetchError::shape(format!(
                "requested item {id} but service returned item {}",
                detail.id()
            )));
        }

        Ok(detail)
    }
}

impl Clone for HttpCatalog {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            config: self.config.clone(),
        }
    }
}
