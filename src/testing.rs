//! In-memory collaborators for controller tests

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::error::FetchError;
use crate::models::{ItemDetail, ItemId, ItemSummary};
use crate::navigation::NavigationRequest;
use crate::traits::{CatalogSource, Navigator};

type Gate<T> = oneshot::Receiver<Result<T, FetchError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Catalog,
    Item(ItemId),
}

/// Catalog whose responses are released by the test, one gate per request.
#[derive(Default)]
pub struct ScriptedCatalog {
    calls: Mutex<Vec<Call>>,
    catalog: Mutex<VecDeque<Gate<Vec<ItemSummary>>>>,
    items: Mutex<HashMap<ItemId, VecDeque<Gate<ItemDetail>>>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate_catalog(&self) -> oneshot::Sender<Result<Vec<ItemSummary>, FetchError>> {
        let (tx, rx) = oneshot::channel();
        self.catalog.lock().push_back(rx);
        tx
    }

    pub fn gate_item(&self, id: ItemId) -> oneshot::Sender<Result<ItemDetail, FetchError>> {
        let (tx, rx) = oneshot::channel();
        self.items.lock().entry(id).or_default().push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }
}

async fn release<T>(gate: Option<Gate<T>>) -> Result<T, FetchError> {
    match gate {
        Some(rx) => rx
            .await
            .unwrap_or_else(|_| Err(FetchError::network("gate dropped"))),
        None => Err(FetchError::network("no scripted response")),
    }
}

#[async_trait]
impl CatalogSource for ScriptedCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<ItemSummary>, FetchError> {
        self.calls.lock().push(Call::Catalog);
        let gate = self.catalog.lock().pop_front();
        release(gate).await
    }

    async fn fetch_item(&self, id: ItemId) -> Result<ItemDetail, FetchError> {
        self.calls.lock().push(Call::Item(id));
        let gate = self.items.lock().get_mut(&id).and_then(VecDeque::pop_front);
        release(gate).await
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    requests: Mutex<Vec<NavigationRequest>>,
}

impl RecordingNavigator {
    pub fn requests(&self) -> Vec<NavigationRequest> {
        self.requests.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, request: NavigationRequest) {
        self.requests.lock().push(request);
    }
}

pub fn summary(id: u64) -> ItemSummary {
    ItemSummary {
        id: ItemId(id),
        title: format!("Item {id}"),
        description: "An item".to_string(),
        price: 9.99,
        stock: 3,
        brand: Some("Brand".to_string()),
        category: "misc".to_string(),
        rating: 4.5,
        discount_percentage: 10.0,
        thumbnail: format!("http://x/{id}.png"),
    }
}

pub fn detail(id: u64) -> ItemDetail {
    ItemDetail {
        summary: summary(id),
        images: vec![format!("http://x/{id}-1.png")],
        tags: Vec::new(),
    }
}
