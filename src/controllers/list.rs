use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::error::FetchError;
use crate::fetch::{FetchCell, FetchState};
use crate::models::{ItemId, ItemSummary};
use crate::navigation::NavigationRequest;
use crate::traits::{CatalogSource, Navigator};

/// What the list screen should draw.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// Indeterminate progress, nothing else
    Loading,
    /// The service answered with an empty collection
    Empty,
    Items(Vec<ItemSummary>),
    /// Kept apart from `Empty` so a failed fetch is never shown as "no items"
    Failed(FetchError),
}

/// Fetches the whole catalog once per mount and hands a selected identifier
/// to the navigation boundary.
pub struct CatalogListController {
    source: Arc<dyn CatalogSource>,
    navigator: Arc<dyn Navigator>,
    cell: FetchCell<(), Vec<ItemSummary>>,
}

impl CatalogListController {
    pub fn new(source: Arc<dyn CatalogSource>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            source,
            navigator,
            cell: FetchCell::new(),
        }
    }

    /// Issues the collection request unless this mount already did.
    ///
    /// Returns `true` when a request went out. Must run inside a Tokio runtime.
    pub fn activate(&self) -> bool {
        let source = self.source.clone();
        let issued = self.cell.activate((), move || async move {
            let outcome = source.fetch_catalog().await;
            if let Err(e) = &outcome {
                error!("Error fetching catalog: {}", e);
            }
            outcome
        });

        if issued {
            info!("Catalog list activated");
        } else {
            debug!("Catalog list already active, ignoring activation");
        }
        issued
    }

    /// Unmounts the screen; a response still in flight is dropped.
    pub fn deactivate(&self) {
        self.cell.deactivate();
    }

    /// Requests a transition to the detail screen for `id`.
    ///
    /// The identifier is passed through untouched; whether it names a real
    /// item is for the detail fetch to find out.
    pub fn select(&self, id: ItemId) {
        info!("Selected item {}", id);
        self.navigator.navigate(NavigationRequest::product_details(id));
    }

    pub fn state(&self) -> FetchState<Vec<ItemSummary>> {
        self.cell.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState<Vec<ItemSummary>>> {
        self.cell.subscribe()
    }

    pub async fn settled(&self) -> FetchState<Vec<ItemSummary>> {
        self.cell.settled().await
    }

    pub fn is_loading(&self) -> bool {
        self.cell.with_state(FetchState::is_pending)
    }

    /// The fetched summaries, or an empty slice unless the state is `Ready`.
    pub fn items(&self) -> Vec<ItemSummary> {
        self.cell
            .with_state(|state| state.ready().cloned().unwrap_or_default())
    }

    pub fn failure(&self) -> Option<FetchError> {
        self.cell.with_state(|state| state.failure().cloned())
    }

    pub fn view(&self) -> ListView {
        self.cell.with_state(|state| match state {
            FetchState::Pending => ListView::Loading,
            FetchState::Ready(items) if items.is_empty() => ListView::Empty,
            FetchState::Ready(items) => ListView::Items(items.clone()),
            FetchState::Failed(err) => ListView::Failed(err.clone()),
        })
    }
}
