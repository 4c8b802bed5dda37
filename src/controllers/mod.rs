//! Screen controllers: each one drives a single remote fetch through its own
//! [`FetchCell`](crate::fetch::FetchCell) and exposes the result as a view.

pub mod detail;
pub mod list;

pub use detail::{DetailView, ItemDetailController};
pub use list::{CatalogListController, ListView};
