//! Filter, sort, and search parameters for product listing views.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for a [`FilterSpec`].
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    /// `min_price` exceeds `max_price`, or a bound is negative.
    #[error("invalid price range: {0} to {1}")]
    InvalidPriceRange(Decimal, Decimal),

    /// Rating threshold outside 0-5.
    #[error("invalid rating threshold: {0}")]
    InvalidRating(f64),
}

/// Category selector: everything, or one concrete category key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Restrict to a single category key.
    Category(String),
}

impl CategoryFilter {
    /// The concrete category key, or `None` for [`CategoryFilter::All`].
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Category(key) => Some(key),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Category(value)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::Category(key) => key,
        }
    }
}

/// Sort keys for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Sort by unit price.
    Price,
    /// Sort by title, lexicographic.
    #[default]
    Title,
    /// Sort by rating.
    Rating,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Largest first.
    #[serde(rename = "desc")]
    Descending,
}

/// The combined filter/sort/search parameters for one product listing view.
///
/// A spec is immutable per evaluation: views replace the whole spec rather
/// than mutating it, and the listing pipeline never modifies one it receives.
///
/// Category and search are resolved upstream by the catalog request; price
/// and rating are applied client-side by the listing pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Category selector.
    pub category: CategoryFilter,
    /// Minimum unit price, inclusive.
    pub min_price: Decimal,
    /// Maximum unit price, inclusive.
    pub max_price: Decimal,
    /// Minimum rating; 0 means no rating filter.
    pub min_rating: f64,
    /// Free-text search; empty means no search.
    pub search: String,
    /// Sort key.
    pub sort_by: SortKey,
    /// Sort direction.
    pub sort_order: SortOrder,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            min_price: Decimal::ZERO,
            max_price: Decimal::new(2000, 0),
            min_rating: 0.0,
            search: String::new(),
            sort_by: SortKey::Title,
            sort_order: SortOrder::Ascending,
        }
    }
}

impl FilterSpec {
    /// Check the spec's internal invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] when the price bounds are inverted or
    /// negative, or the rating threshold falls outside 0-5.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.min_price < Decimal::ZERO || self.min_price > self.max_price {
            return Err(FilterError::InvalidPriceRange(
                self.min_price,
                self.max_price,
            ));
        }
        if !(0.0..=5.0).contains(&self.min_rating) {
            return Err(FilterError::InvalidRating(self.min_rating));
        }
        Ok(())
    }

    /// The search string, or `None` when empty.
    #[must_use]
    pub fn search_query(&self) -> Option<&str> {
        if self.search.is_empty() {
            None
        } else {
            Some(&self.search)
        }
    }

    /// Stable token identifying the upstream catalog fetch this spec needs.
    ///
    /// Only category and search participate: those are the parameters the
    /// catalog request is built from. Callers compare the signature captured
    /// when a fetch was issued against the current spec's, and discard the
    /// response if they no longer match, so a superseded fetch that resolves
    /// late cannot overwrite fresher results.
    #[must_use]
    pub fn request_signature(&self) -> String {
        format!(
            "category={}&search={}",
            self.category.as_key().unwrap_or("all"),
            self.search
        )
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_default_matches_listing_view_defaults() {
        let spec = FilterSpec::default();
        assert_eq!(spec.category, CategoryFilter::All);
        assert_eq!(spec.min_price, Decimal::ZERO);
        assert_eq!(spec.max_price, dec!(2000));
        assert_eq!(spec.min_rating, 0.0);
        assert_eq!(spec.search, "");
        assert_eq!(spec.sort_by, SortKey::Title);
        assert_eq!(spec.sort_order, SortOrder::Ascending);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_price_range() {
        let spec = FilterSpec {
            min_price: dec!(50),
            max_price: dec!(20),
            ..FilterSpec::default()
        };
        assert_eq!(
            spec.validate(),
            Err(FilterError::InvalidPriceRange(dec!(50), dec!(20)))
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating() {
        let spec = FilterSpec {
            min_rating: 5.5,
            ..FilterSpec::default()
        };
        assert!(matches!(spec.validate(), Err(FilterError::InvalidRating(_))));
    }

    #[test]
    fn test_category_filter_serde_uses_all_sentinel() {
        let all: CategoryFilter = serde_json::from_str(r#""all""#).expect("deserialize");
        assert_eq!(all, CategoryFilter::All);
        let laptops: CategoryFilter = serde_json::from_str(r#""laptops""#).expect("deserialize");
        assert_eq!(laptops, CategoryFilter::Category("laptops".to_string()));
        assert_eq!(
            serde_json::to_string(&CategoryFilter::All).expect("serialize"),
            r#""all""#
        );
    }

    #[test]
    fn test_request_signature_tracks_category_and_search() {
        let spec = FilterSpec {
            category: CategoryFilter::Category("laptops".to_string()),
            search: "macbook".to_string(),
            ..FilterSpec::default()
        };
        assert_eq!(spec.request_signature(), "category=laptops&search=macbook");

        // Price and sort changes do not require a new fetch.
        let reordered = FilterSpec {
            sort_by: SortKey::Price,
            min_price: dec!(100),
            ..spec.clone()
        };
        assert_eq!(spec.request_signature(), reordered.request_signature());
    }
}
