//! Core types for Clementine.
//!
//! This module provides the domain vocabulary shared by the catalog client,
//! the cart store, and the listing pipeline.

pub mod cart;
pub mod filter;
pub mod id;
pub mod product;

pub use cart::CartLine;
pub use filter::{CategoryFilter, FilterError, FilterSpec, SortKey, SortOrder};
pub use id::*;
pub use product::{Product, ProductPage};
