//! # Text presentation
//!
//! Turns the controllers' views into plain-text cards for the headless
//! browser. Each card mirrors the layout of the product screens:
//!
//! - **Title** and **description**
//! - **Fields**: price (`$9.99`), stock, brand, category, rating, discount
//! - **Thumbnail**: the image URI, since a terminal cannot show it
//!
//! Loading and failure get their own one-line renderings so that an empty
//! catalog and a failed fetch never look the same.

use std::fmt;

use crate::controllers::{DetailView, ListView};
use crate::models::{ItemDetail, ItemSummary};

/// Labelled value inside a card
#[derive(Debug, Clone, PartialEq)]
pub struct CardField {
    pub name: &'static str,
    pub value: String,
}

/// One product rendered for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub fields: Vec<CardField>,
}

impl Card {
    pub fn summary(item: &ItemSummary) -> Self {
        let brand = item.brand.clone().unwrap_or_else(|| "-".to_string());

        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            thumbnail: item.thumbnail.clone(),
            fields: vec![
                CardField {
                    name: "Price",
                    value: format!("${}", item.price),
                },
                CardField {
                    name: "Stock",
                    value: item.stock.to_string(),
                },
                CardField {
                    name: "Brand",
                    value: brand,
                },
                CardField {
                    name: "Category",
                    value: item.category.clone(),
                },
                CardField {
                    name: "Rating",
                    value: item.rating.to_string(),
                },
                CardField {
                    name: "Discount",
                    value: format!("{}%", item.discount_percentage),
                },
            ],
        }
    }

    pub fn detail(detail: &ItemDetail) -> Self {
        let mut card = Self::summary(&detail.summary);
        if !detail.tags.is_empty() {
            card.fields.push(CardField {
                name: "Tags",
                value: detail.tags.join(", "),
            });
        }
        if !detail.images.is_empty() {
            card.fields.push(CardField {
                name: "Images",
                value: detail.images.len().to_string(),
            });
        }
        card
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if !self.description.is_empty() {
            writeln!(f, "  {}", self.description)?;
        }
        for field in &self.fields {
            // price is shown bare, like on the product screens
            if field.name == "Price" {
                writeln!(f, "  {}", field.value)?;
            } else {
                writeln!(f, "  {}: {}", field.name, field.value)?;
            }
        }
        write!(f, "  [{}]", self.thumbnail)
    }
}

pub fn render_list(view: &ListView) -> String {
    match view {
        ListView::Loading => "Loading...".to_string(),
        ListView::Empty => "No products available.".to_string(),
        ListView::Items(items) => items
            .iter()
            .map(|item| Card::summary(item).to_string())
            .collect::<Vec<_>>()
            .join("\n\n"),
        ListView::Failed(err) => format!("Could not load products: {err}"),
    }
}

pub fn render_detail(view: &DetailView) -> String {
    match view {
        DetailView::Loading => "Loading...".to_string(),
        DetailView::Item(detail) => Card::detail(detail).to_string(),
        DetailView::Failed(err) => format!("Could not load product: {err}"),
    }
}
