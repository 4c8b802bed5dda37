//! Seams between the controllers and their collaborators

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::{ItemDetail, ItemId, ItemSummary};
use crate::navigation::NavigationRequest;

/// Read-only access to the remote catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the whole collection, in the order the service returns it.
    ///
    /// # Returns
    /// * `Result<Vec<ItemSummary>, FetchError>` - validated summaries or the classified failure
    async fn fetch_catalog(&self) -> Result<Vec<ItemSummary>, FetchError>;

    /// Fetch the full record of one item.
    ///
    /// # Arguments
    /// * `id` - The identifier received from the navigation boundary
    ///
    /// # Returns
    /// * `Result<ItemDetail, FetchError>` - the record, or `Protocol` when the id is unknown
    async fn fetch_item(&self, id: ItemId) -> Result<ItemDetail, FetchError>;
}

/// Accepts transition requests from a screen controller.
pub trait Navigator: Send + Sync {
    fn navigate(&self, request: NavigationRequest);
}
