//! Two-screen catalog browser core: a product list and a product detail
//! screen, each driving one remote fetch, joined by a navigation boundary
//! that carries the selected identifier.

pub mod browser;
pub mod client;
pub mod config;
pub mod controllers;
pub mod error;
pub mod fetch;
pub mod models;
pub mod navigation;
pub mod present;
pub mod traits;

#[cfg(test)]
mod testing;

pub use browser::{BrowseOutcome, CatalogBrowser};
pub use error::{FailureKind, FetchError};
pub use fetch::FetchState;
