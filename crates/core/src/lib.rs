//! Clementine Core - Shared types library.
//!
//! This crate provides the domain types shared across Clementine components:
//! - `storefront` - catalog client, cart store, and listing pipeline
//! - host applications embedding the storefront core
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients,
//! no storage access. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, cart lines, filter specifications, and IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
