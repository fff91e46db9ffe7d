//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::product::Product;

/// One product entry in the cart, with its own quantity.
///
/// A line captures the product's price, title, and stock at the time it was
/// added; `stock` acts as the quantity ceiling for the line's lifetime.
///
/// Invariant: `1 <= quantity <= stock` while the line exists. A quantity
/// update that would fall to zero removes the line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product identifier; unique within the cart.
    pub id: ProductId,
    /// Product title at the time of add.
    pub title: String,
    /// Unit price at the time of add.
    pub price: Decimal,
    /// Quantity in the cart (>= 1).
    pub quantity: u32,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Stock ceiling captured at the time of add.
    pub stock: u32,
}

impl CartLine {
    /// Create a line for a product with quantity 1.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            quantity: 1,
            thumbnail: product.thumbnail.clone(),
            stock: product.stock,
        }
    }

    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
