//! Live catalog smoke tests. Ignored by default; run with
//! `cargo test -- --ignored` when network access to the demo catalog is
//! available.

use clementine_core::ProductId;
use clementine_storefront::catalog::{CatalogClient, CatalogError, ProductQuery};
use clementine_storefront::config::StorefrontConfig;

fn client() -> CatalogClient {
    CatalogClient::new(&StorefrontConfig::default())
}

#[tokio::test]
#[ignore = "hits the live demo catalog"]
async fn list_products_returns_a_page() {
    let page = client()
        .list_products(&ProductQuery {
            limit: 5,
            skip: 0,
            category: None,
            search: None,
        })
        .await
        .expect("list products");
    assert_eq!(page.products.len(), 5);
    assert!(page.total >= 5);
}

#[tokio::test]
#[ignore = "hits the live demo catalog"]
async fn get_product_unknown_id_is_not_found() {
    let result = client().get_product(ProductId::new(999_999)).await;
    assert!(matches!(result, Err(CatalogError::NotFound(_))));
}

#[tokio::test]
#[ignore = "hits the live demo catalog"]
async fn list_related_excludes_the_product_itself() {
    let client = client();
    let product = client.get_product(ProductId::new(1)).await.expect("product");
    let related = client
        .list_related(&product.category, product.id)
        .await
        .expect("related");
    assert!(related.iter().all(|p| p.id != product.id));
}
