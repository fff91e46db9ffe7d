//! Product types as served by the remote catalog.
//!
//! These mirror the catalog's JSON wire format (camelCase fields) and are
//! read-only to the rest of the system: the cart store and listing pipeline
//! only ever derive new values from them.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A product in the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog-wide unique identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Plain text description.
    #[serde(default)]
    pub description: String,
    /// Unit price in the catalog's currency.
    pub price: Decimal,
    /// Discount percentage (0-100).
    #[serde(default)]
    pub discount_percentage: f64,
    /// Average review rating (0.0-5.0).
    #[serde(default)]
    pub rating: f64,
    /// Units currently in stock.
    pub stock: u32,
    /// Brand name, when the catalog knows it.
    #[serde(default)]
    pub brand: Option<String>,
    /// Category key (e.g., "smartphones").
    pub category: String,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,
    /// Gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Unit price after applying the catalog discount, rounded to cents.
    #[must_use]
    pub fn discounted_price(&self) -> Decimal {
        let percentage =
            Decimal::from_f64(self.discount_percentage).unwrap_or_default();
        let factor = (Decimal::ONE_HUNDRED - percentage) / Decimal::ONE_HUNDRED;
        (self.price * factor).round_dp(2)
    }
}

/// One page of a catalog product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    /// Products in this page.
    pub products: Vec<Product>,
    /// Total products matching the query, across all pages.
    pub total: u64,
    /// Offset this page starts at.
    pub skip: u64,
    /// Page size requested.
    pub limit: u64,
}
