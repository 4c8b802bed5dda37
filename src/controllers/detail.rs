use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::error::FetchError;
use crate::fetch::{FetchCell, FetchState};
use crate::models::{ItemDetail, ItemId};
use crate::navigation::DetailParams;
use crate::traits::CatalogSource;

/// What the detail screen should draw.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Loading,
    Item(ItemDetail),
    Failed(FetchError),
}

/// Fetches one item by the identifier delivered through navigation.
///
/// The fetch is a function of the identifier: activating with a new one
/// resets to `Pending` and refetches, and whatever the previous request
/// returns afterwards is dropped.
pub struct ItemDetailController {
    source: Arc<dyn CatalogSource>,
    cell: FetchCell<ItemId, ItemDetail>,
}

impl ItemDetailController {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            cell: FetchCell::new(),
        }
    }

    /// Fetches the item named by `params` unless it is already the live one.
    ///
    /// Returns `true` when a request went out. Must run inside a Tokio runtime.
    pub fn activate(&self, params: DetailParams) -> bool {
        let id = params.product_id;
        let source = self.source.clone();
        let issued = self.cell.activate(id, move || async move {
            let outcome = source.fetch_item(id).await;
            if let Err(e) = &outcome {
                error!("Error fetching item {}: {}", id, e);
            }
            outcome
        });

        if issued {
            info!("Item detail activated for {}", id);
        } else {
            debug!("Item detail already showing {}", id);
        }
        issued
    }

    pub fn deactivate(&self) {
        self.cell.deactivate();
    }

    /// Identifier of the live activation
    pub fn current_id(&self) -> Option<ItemId> {
        self.cell.key()
    }

    pub fn state(&self) -> FetchState<ItemDetail> {
        self.cell.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState<ItemDetail>> {
        self.cell.subscribe()
    }

    pub async fn settled(&self) -> FetchState<ItemDetail> {
        self.cell.settled().await
    }

    pub fn is_loading(&self) -> bool {
        self.cell.with_state(FetchState::is_pending)
    }

    pub fn view(&self) -> DetailView {
        self.cell.with_state(|state| match state {
            FetchState::Pending => DetailView::Loading,
            FetchState::Ready(detail) => DetailView::Item(detail.clone()),
            FetchState::Failed(err) => DetailView::Failed(err.clone()),
        })
    }
}
