//! Catalog records as served by the catalog service, validated at the fetch boundary

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Identifier of one catalog entry.
///
/// Serialises as a bare number so it survives the navigation parameter bag
/// without a detour through strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One entry of the catalog collection, as shown on the list screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub stock: u32,
    /// Some catalog entries carry no brand at all
    #[serde(default)]
    pub brand: Option<String>,
    pub category: String,
    pub rating: f64,
    pub discount_percentage: f64,
    pub thumbnail: String,
}

impl ItemSummary {
    /// Checks the value ranges the type system cannot express.
    pub fn validate(&self) -> Result<(), FetchError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(FetchError::shape(format!(
                "item {} has invalid price {}",
                self.id, self.price
            )));
        }
        if !self.rating.is_finite() {
            return Err(FetchError::shape(format!(
                "item {} has invalid rating {}",
                self.id, self.rating
            )));
        }
        if !(0.0..=100.0).contains(&self.discount_percentage) {
            return Err(FetchError::shape(format!(
                "item {} has discount {} outside 0..=100",
                self.id, self.discount_percentage
            )));
        }
        Ok(())
    }
}

/// Full record of a single item, fetched independently of the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    #[serde(flatten)]
    pub summary: ItemSummary,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ItemDetail {
    pub fn id(&self) -> ItemId {
        self.summary.id
    }

    pub fn validate(&self) -> Result<(), FetchError> {
        self.summary.validate()
    }

    /// Parses and validates a single-item body.
    pub fn parse(body: &[u8]) -> Result<Self, FetchError> {
        let detail: Self = serde_json::from_slice(body)?;
        detail.validate()?;
        Ok(detail)
    }
}

/// Body of the collection endpoint. Paging counters the service adds are ignored.
#[derive(Debug, Deserialize)]
pub struct CatalogPage {
    pub products: Vec<ItemSummary>,
}

impl CatalogPage {
    /// Parses and validates a collection body, keeping the service's order.
    pub fn parse(body: &[u8]) -> Result<Vec<ItemSummary>, FetchError> {
        let page: Self = serde_json::from_slice(body)?;

        let mut seen = HashSet::with_capacity(page.products.len());
        for item in &page.products {
            item.validate()?;
            // the list keys rows by id
            if !seen.insert(item.id) {
                return Err(FetchError::shape(format!(
                    "duplicate item id {} in collection",
                    item.id
                )));
            }
        }

        Ok(page.products)
    }
}
