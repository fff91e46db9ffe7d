//! Remote product catalog client.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest`; the catalog is the source of truth, with no
//!   local sync
//! - In-memory caching via `moka` keyed by the full request parameters, so a
//!   response can only ever fill the cache slot of the request that produced
//!   it (TTL from config, 5 minutes by default)
//! - Category and search filtering happen server-side here; price and rating
//!   filtering happen client-side in [`crate::listing`]
//!
//! # Example
//!
//! ```rust,ignore
//! use clementine_storefront::catalog::{CatalogClient, ProductQuery};
//!
//! let client = CatalogClient::new(&config);
//!
//! // List the first window of a category
//! let page = client
//!     .list_products(&ProductQuery::from_spec(&spec, config.catalog_page_limit))
//!     .await?;
//!
//! // Get one product
//! let product = client.get_product(ProductId::new(1)).await?;
//! ```

mod cache;
mod request;

pub use request::ProductQuery;

use std::sync::Arc;

use moka::future::Cache;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use clementine_core::{Product, ProductId, ProductPage};

use crate::config::StorefrontConfig;
use cache::CacheValue;

/// How many products a related-items lookup fetches before exclusion.
const RELATED_FETCH_LIMIT: u64 = 4;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connection, timeout, etc.).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog returned a non-success status.
    #[error("Catalog returned HTTP {status}: {body}")]
    Status {
        /// Response status code.
        status: u16,
        /// Truncated response body for diagnostics.
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Requested product does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Client for the remote product catalog.
///
/// Cheap to clone; all clones share the HTTP connection pool and cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(config.catalog_cache_ttl)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.catalog_base_url.clone(),
                cache,
            }),
        }
    }

    /// Execute a GET request and decode the JSON body.
    ///
    /// The body is fetched as text first for better diagnostics when the
    /// catalog returns something unexpected.
    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let response = self.inner.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(url.path().to_string()));
        }

        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                url = %url,
                body = %body.chars().take(500).collect::<String>(),
                "Catalog returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    url = %url,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse catalog response"
                );
                Err(CatalogError::Parse(e))
            }
        }
    }

    /// List products, optionally restricted to a category or search query.
    ///
    /// Search takes precedence over category when both are set. Responses
    /// are cached under the full query signature.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage, CatalogError> {
        let cache_key = query.cache_key();

        if let Some(CacheValue::Page(page)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product listing");
            return Ok(page);
        }

        let url = request::listing_url(&self.inner.base_url, query);
        let page: ProductPage = self.fetch(url).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Page(page.clone()))
            .await;

        Ok(page)
    }

    /// Get a product by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no product matches, or another
    /// error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let cache_key = format!("product:{id}");

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let url = request::product_url(&self.inner.base_url, id);
        let product: Product = self.fetch(url).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    /// List all category keys known to the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        let cache_key = "categories".to_string();

        if let Some(CacheValue::Categories(categories)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let url = request::categories_url(&self.inner.base_url);
        let categories: Vec<String> = self.fetch(url).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Categories(categories.clone()))
            .await;

        Ok(categories)
    }

    /// List products related to one product: its category neighbours, with
    /// the product itself excluded.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self), fields(category = %category, exclude_id = %exclude_id))]
    pub async fn list_related(
        &self,
        category: &str,
        exclude_id: ProductId,
    ) -> Result<Vec<Product>, CatalogError> {
        let query = ProductQuery {
            limit: RELATED_FETCH_LIMIT,
            skip: 0,
            category: Some(category.to_string()),
            search: None,
        };

        let page = self.list_products(&query).await?;

        Ok(page
            .products
            .into_iter()
            .filter(|product| product.id != exclude_id)
            .collect())
    }

    /// Invalidate all cached catalog data.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}
