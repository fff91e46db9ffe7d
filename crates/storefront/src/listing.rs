//! The product listing pipeline: filter, sort, paginate.
//!
//! Pure derivation over an already-fetched product set. Nothing here mutates
//! its input or keeps state between calls; every evaluation starts from the
//! raw products and the current [`FilterSpec`].
//!
//! Category and free-text search are resolved upstream by the catalog
//! request that produced the raw set, so this pipeline does not re-filter on
//! them. Known limitation: price and rating filters therefore only see the
//! fetched window, not the full category/search result set. The default
//! fetch window (`CATALOG_PAGE_LIMIT`, 100) is deliberately wide to soften
//! this.

use std::cmp::Ordering;

use clementine_core::{FilterSpec, Product, SortKey, SortOrder};

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number, starting at 1.
    pub number: usize,
    /// Products per page.
    pub size: usize,
}

impl PageRequest {
    /// The first page at a given size.
    #[must_use]
    pub const fn first(size: usize) -> Self {
        Self { number: 1, size }
    }
}

/// One evaluated listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Products on this page, in display order.
    pub products: Vec<Product>,
    /// Products matching the filters, across all pages.
    pub total: usize,
    /// Number of pages at the requested page size.
    pub total_pages: usize,
    /// The 1-based page number this listing was evaluated for.
    pub page: usize,
}

/// Derive the visible listing page from a raw product set and a filter spec.
///
/// Stages run in a fixed order: price filter, rating filter, stable sort,
/// pagination. `total` counts products after filtering and before
/// pagination. A page number past the end yields an empty page, not an
/// error.
#[must_use]
pub fn paginate_listing(products: &[Product], spec: &FilterSpec, page: PageRequest) -> Listing {
    let mut filtered: Vec<&Product> = products
        .iter()
        .filter(|product| {
            product.price >= spec.min_price
                && product.price <= spec.max_price
                && (spec.min_rating == 0.0 || product.rating >= spec.min_rating)
        })
        .collect();

    // sort_by is stable: products equal under the key keep their pre-sort
    // relative order, which keeps pagination reproducible.
    filtered.sort_by(|a, b| {
        let ordering = compare_products(a, b, spec.sort_by);
        match spec.sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });

    let total = filtered.len();
    let total_pages = total.div_ceil(page.size.max(1));

    let start = page.number.saturating_sub(1).saturating_mul(page.size);
    let page_products = filtered
        .into_iter()
        .skip(start)
        .take(page.size)
        .cloned()
        .collect();

    Listing {
        products: page_products,
        total,
        total_pages,
        page: page.number,
    }
}

/// Compare two products under a sort key, ascending.
///
/// Exposed for callers that need the listing order outside a full
/// evaluation (e.g., ordering a small related-products strip).
#[must_use]
pub fn compare_products(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Rating => a.rating.total_cmp(&b.rating),
        SortKey::Title => a.title.cmp(&b.title),
    }
}

#[cfg(test)]
mod tests {
    use clementine_core::ProductId;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    fn product(id: u64, title: &str, price: Decimal, rating: f64) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            description: String::new(),
            price,
            discount_percentage: 0.0,
            rating,
            stock: 10,
            brand: None,
            category: "misc".to_string(),
            thumbnail: String::new(),
            images: vec![],
        }
    }

    fn priced(prices: &[Decimal]) -> Vec<Product> {
        prices
            .iter()
            .enumerate()
            .map(|(i, price)| product(i as u64 + 1, "Item", *price, 4.0))
            .collect()
    }

    fn spec() -> FilterSpec {
        FilterSpec::default()
    }

    #[test]
    fn test_price_filter_is_inclusive_both_ends() {
        let products = priced(&[dec!(10), dec!(20), dec!(35), dec!(50), dec!(60)]);
        let spec = FilterSpec {
            min_price: dec!(20),
            max_price: dec!(50),
            sort_by: SortKey::Price,
            ..spec()
        };
        let listing = paginate_listing(&products, &spec, PageRequest::first(12));
        let prices: Vec<Decimal> = listing.products.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![dec!(20), dec!(35), dec!(50)]);
        assert_eq!(listing.total, 3);
    }

    #[test]
    fn test_rating_threshold_zero_retains_all() {
        let products = vec![
            product(1, "A", dec!(10), 0.0),
            product(2, "B", dec!(10), 4.9),
        ];
        let listing = paginate_listing(&products, &spec(), PageRequest::first(12));
        assert_eq!(listing.total, 2);

        let strict = FilterSpec {
            min_rating: 4.0,
            ..spec()
        };
        let listing = paginate_listing(&products, &strict, PageRequest::first(12));
        assert_eq!(listing.total, 1);
        assert_eq!(listing.products[0].id, ProductId::new(2));
    }

    #[test]
    fn test_sort_by_price_ascending_and_descending() {
        let products = priced(&[dec!(30), dec!(10), dec!(20)]);
        let ascending = FilterSpec {
            sort_by: SortKey::Price,
            ..spec()
        };
        let listing = paginate_listing(&products, &ascending, PageRequest::first(12));
        let prices: Vec<Decimal> = listing.products.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![dec!(10), dec!(20), dec!(30)]);

        let descending = FilterSpec {
            sort_by: SortKey::Price,
            sort_order: SortOrder::Descending,
            ..spec()
        };
        let listing = paginate_listing(&products, &descending, PageRequest::first(12));
        let prices: Vec<Decimal> = listing.products.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![dec!(30), dec!(20), dec!(10)]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let products = vec![
            product(1, "Same", dec!(10), 4.0),
            product(2, "Same", dec!(10), 4.0),
            product(3, "Same", dec!(10), 4.0),
        ];
        for key in [SortKey::Price, SortKey::Title, SortKey::Rating] {
            for order in [SortOrder::Ascending, SortOrder::Descending] {
                let spec = FilterSpec {
                    sort_by: key,
                    sort_order: order,
                    ..spec()
                };
                let listing = paginate_listing(&products, &spec, PageRequest::first(12));
                let ids: Vec<u64> = listing.products.iter().map(|p| p.id.as_u64()).collect();
                assert_eq!(ids, vec![1, 2, 3], "{key:?} {order:?}");
            }
        }
    }

    #[test]
    fn test_sort_by_title_is_lexicographic() {
        let products = vec![
            product(1, "Banana", dec!(1), 4.0),
            product(2, "Apple", dec!(1), 4.0),
            product(3, "Cherry", dec!(1), 4.0),
        ];
        let listing = paginate_listing(&products, &spec(), PageRequest::first(12));
        let titles: Vec<&str> = listing.products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_pagination_slices_and_out_of_range_page_is_empty() {
        let products: Vec<Product> = (1..=25)
            .map(|i| product(i, "Item", Decimal::from(i), 4.0))
            .collect();
        let spec = FilterSpec {
            sort_by: SortKey::Price,
            ..spec()
        };

        let page1 = paginate_listing(&products, &spec, PageRequest { number: 1, size: 12 });
        assert_eq!(page1.products.len(), 12);
        assert_eq!(page1.total, 25);
        assert_eq!(page1.total_pages, 3);

        let page3 = paginate_listing(&products, &spec, PageRequest { number: 3, size: 12 });
        assert_eq!(page3.products.len(), 1);

        let page4 = paginate_listing(&products, &spec, PageRequest { number: 4, size: 12 });
        assert!(page4.products.is_empty());
        assert_eq!(page4.total, 25);
    }

    #[test]
    fn test_pipeline_never_mutates_input() {
        let products = priced(&[dec!(30), dec!(10), dec!(20)]);
        let snapshot = products.clone();
        let spec = FilterSpec {
            sort_by: SortKey::Price,
            sort_order: SortOrder::Descending,
            ..spec()
        };
        let _ = paginate_listing(&products, &spec, PageRequest::first(2));
        assert_eq!(products, snapshot);
    }

    #[test]
    fn test_total_counts_after_filter_before_pagination() {
        let products = priced(&[dec!(5), dec!(15), dec!(25), dec!(35)]);
        let spec = FilterSpec {
            min_price: dec!(10),
            max_price: dec!(30),
            ..spec()
        };
        let listing = paginate_listing(&products, &spec, PageRequest { number: 1, size: 1 });
        assert_eq!(listing.products.len(), 1);
        assert_eq!(listing.total, 2);
        assert_eq!(listing.total_pages, 2);
    }
}
