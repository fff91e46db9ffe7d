//! Catalog request parameters and URL construction.
//!
//! URL building is kept pure so the endpoint selection rules (search takes
//! precedence over category, category is a path segment, paging is always a
//! query pair) can be tested without a network.

use clementine_core::{FilterSpec, ProductId};
use url::Url;

/// Parameters for a product listing request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductQuery {
    /// Maximum products to return.
    pub limit: u64,
    /// Offset to start at.
    pub skip: u64,
    /// Restrict to one category key.
    pub category: Option<String>,
    /// Free-text search query. Takes precedence over `category`.
    pub search: Option<String>,
}

impl ProductQuery {
    /// Build the listing query a filter spec requires.
    ///
    /// Only the spec's category and search participate; price, rating, and
    /// sort are applied client-side by the listing pipeline.
    #[must_use]
    pub fn from_spec(spec: &FilterSpec, limit: u64) -> Self {
        Self {
            limit,
            skip: 0,
            category: spec.category.as_key().map(str::to_string),
            search: spec.search_query().map(str::to_string),
        }
    }

    /// Cache key uniquely identifying this request.
    #[must_use]
    pub fn cache_key(&self) -> String {
        format!(
            "products:{}:{}:{}:{}",
            self.limit,
            self.skip,
            self.category.as_deref().unwrap_or(""),
            self.search.as_deref().unwrap_or(""),
        )
    }
}

/// Build the listing URL for a query against a catalog base URL.
pub(crate) fn listing_url(base: &Url, query: &ProductQuery) -> Url {
    let mut url = base.clone();
    {
        let mut path = String::from("products");
        if let Some(search) = query.search.as_deref() {
            // Search endpoint; the q parameter carries the text.
            path.push_str("/search");
            url.set_path(&path);
            url.query_pairs_mut().append_pair("q", search);
        } else if let Some(category) = query.category.as_deref() {
            path.push_str("/category/");
            path.push_str(&urlencoding::encode(category));
            url.set_path(&path);
        } else {
            url.set_path(&path);
        }
    }
    url.query_pairs_mut()
        .append_pair("limit", &query.limit.to_string())
        .append_pair("skip", &query.skip.to_string());
    url
}

/// Build the URL for a single product.
pub(crate) fn product_url(base: &Url, id: ProductId) -> Url {
    let mut url = base.clone();
    url.set_path(&format!("products/{id}"));
    url
}

/// Build the URL for the category list.
pub(crate) fn categories_url(base: &Url) -> Url {
    let mut url = base.clone();
    url.set_path("products/categories");
    url
}
