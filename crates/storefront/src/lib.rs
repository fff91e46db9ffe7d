//! Clementine Storefront client core.
//!
//! This crate provides the storefront's stateful core as a library,
//! allowing it to be embedded, tested, and reused by any presentation
//! layer:
//!
//! - [`catalog`] - async HTTP client for the remote product catalog
//! - [`cart`] - persisted cart store with atomic mutations and observers
//! - [`listing`] - pure filter/sort/paginate pipeline over fetched products
//! - [`checkout`] - order summary math (shipping, tax, total)
//! - [`config`] - environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod listing;
