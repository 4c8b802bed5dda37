//! Navigation boundary between the list and detail screens

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::models::ItemId;
use crate::traits::Navigator;

/// The two screens of the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    ProductList,
    ProductDetails,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Self::ProductList => "Product List",
            Self::ProductDetails => "Product Details",
        }
    }
}

/// Parameter bag handed to the detail screen.
///
/// The identifier is required by construction, so a detail activation can
/// never be asked for without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailParams {
    pub product_id: ItemId,
}

/// A transition to a destination screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", content = "params")]
pub enum NavigationRequest {
    ProductDetails(DetailParams),
}

impl NavigationRequest {
    pub fn product_details(product_id: ItemId) -> Self {
        Self::ProductDetails(DetailParams { product_id })
    }

    pub fn screen(&self) -> Screen {
        match self {
            Self::ProductDetails(_) => Screen::ProductDetails,
        }
    }
}

/// Forwards navigation requests to whoever drives the screens.
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<NavigationRequest>,
}

impl ChannelNavigator {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<NavigationRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, request: NavigationRequest) {
        debug!(screen = ?request.screen(), "navigation requested");
        if self.tx.send(request).is_err() {
            warn!("Navigation request dropped: no screen driver is listening");
        }
    }
}

/// Stack navigator with the product list as its fixed root
#[derive(Debug, Clone)]
pub struct NavigationStack {
    entries: Vec<(Screen, Option<DetailParams>)>,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self {
            entries: vec![(Screen::ProductList, None)],
        }
    }
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes the destination of `request` and returns its parameters.
    pub fn push(&mut self, request: NavigationRequest) -> DetailParams {
        match request {
            NavigationRequest::ProductDetails(params) => {
                self.entries.push((Screen::ProductDetails, Some(params)));
                params
            }
        }
    }

    /// Pops the top screen. The root stays put; returns `false` in that case.
    pub fn back(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Screen {
        self.entries
            .last()
            .map_or(Screen::ProductList, |(screen, _)| *screen)
    }

    pub fn current_params(&self) -> Option<DetailParams> {
        self.entries.last().and_then(|(_, params)| *params)
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}
