//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults match the public demo catalog.
//!
//! - `CATALOG_BASE_URL` - Catalog API base URL (default: `https://dummyjson.com`)
//! - `CATALOG_PAGE_LIMIT` - Products fetched per listing request (default: 100).
//!   Listing views fetch a wide window so that client-side price/rating
//!   filters have enough to work with.
//! - `CATALOG_CACHE_TTL_SECS` - Catalog response cache TTL (default: 300)
//! - `CART_STORAGE_PATH` - File path for the persisted cart; when unset the
//!   cart lives in memory only
//! - `LISTING_PAGE_SIZE` - Products per rendered listing page (default: 12)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_CATALOG_BASE_URL: &str = "https://dummyjson.com";
const DEFAULT_PAGE_LIMIT: u64 = 100;
const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_LISTING_PAGE_SIZE: usize = 12;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog API base URL
    pub catalog_base_url: Url,
    /// Products fetched per listing request
    pub catalog_page_limit: u64,
    /// Catalog response cache TTL
    pub catalog_cache_ttl: Duration,
    /// File path for the persisted cart, if any
    pub cart_storage_path: Option<PathBuf>,
    /// Products per rendered listing page
    pub listing_page_size: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            // The default is a compile-time constant and always parses.
            catalog_base_url: Url::parse(DEFAULT_CATALOG_BASE_URL)
                .expect("default base URL is valid"),
            catalog_page_limit: DEFAULT_PAGE_LIMIT,
            catalog_cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            cart_storage_path: None,
            listing_page_size: DEFAULT_LISTING_PAGE_SIZE,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_base_url = get_env_or_default("CATALOG_BASE_URL", DEFAULT_CATALOG_BASE_URL);
        let catalog_base_url = Url::parse(&catalog_base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("CATALOG_BASE_URL".to_string(), e.to_string())
        })?;

        let catalog_page_limit = parse_env_or("CATALOG_PAGE_LIMIT", DEFAULT_PAGE_LIMIT)?;
        let cache_ttl_secs = parse_env_or("CATALOG_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?;
        let listing_page_size = parse_env_or("LISTING_PAGE_SIZE", DEFAULT_LISTING_PAGE_SIZE)?;

        let cart_storage_path = get_optional_env("CART_STORAGE_PATH").map(PathBuf::from);

        Ok(Self {
            catalog_base_url,
            catalog_page_limit,
            catalog_cache_ttl: Duration::from_secs(cache_ttl_secs),
            cart_storage_path,
            listing_page_size,
        })
    }
}

/// Get an environment variable, falling back to a default.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Parse an environment variable, falling back to a default when unset.
fn parse_env_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}
