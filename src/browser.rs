use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::info;

use crate::client::HttpCatalog;
use crate::config::CatalogConfig;
use crate::controllers::{CatalogListController, DetailView, ItemDetailController, ListView};
use crate::navigation::{ChannelNavigator, NavigationRequest, NavigationStack, Screen};
use crate::present::{render_detail, render_list};
use crate::traits::CatalogSource;

/// What one headless browse produced, screen by screen
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseOutcome {
    pub list: ListView,
    pub detail: Option<DetailView>,
}

/// Drives both screens without a UI: list, pick the first item, show it.
pub struct CatalogBrowser {
    list: CatalogListController,
    detail: ItemDetailController,
    requests: mpsc::UnboundedReceiver<NavigationRequest>,
    stack: NavigationStack,
}

impl CatalogBrowser {
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let source = HttpCatalog::new(config)?;
        Ok(Self::with_source(Arc::new(source)))
    }

    pub fn with_source(source: Arc<dyn CatalogSource>) -> Self {
        let (navigator, requests) = ChannelNavigator::new();
        let list = CatalogListController::new(source.clone(), Arc::new(navigator));
        let detail = ItemDetailController::new(source);

        Self {
            list,
            detail,
            requests,
            stack: NavigationStack::new(),
        }
    }

    pub async fn run(&mut self) -> Result<BrowseOutcome> {
        self.list.activate();
        self.list.settled().await;

        let list = self.list.view();
        println!("== {} ==", Screen::ProductList.title());
        println!("{}", render_list(&list));

        let Some(first) = self.list.items().first().map(|item| item.id) else {
            if list == ListView::Empty {
                info!("Catalog is empty, nothing to open");
            }
            return Ok(BrowseOutcome { list, detail: None });
        };

        self.list.select(first);
        let request = self
            .requests
            .recv()
            .await
            .context("Navigation channel closed before the detail screen opened")?;
        let params = self.stack.push(request);

        self.detail.activate(params);
        self.detail.settled().await;

        let detail = self.detail.view();
        println!("\n== {} ==", self.stack.current().title());
        println!("{}", render_detail(&detail));

        self.detail.deactivate();
        self.stack.back();

        Ok(BrowseOutcome {
            list,
            detail: Some(detail),
        })
    }
}
