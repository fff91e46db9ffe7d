//! Cache types for catalog API responses.

use clementine_core::{Product, ProductPage};

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Product(Box<Product>),
    Page(ProductPage),
    Categories(Vec<String>),
}
