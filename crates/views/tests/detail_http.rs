//! Product detail view against a local stub catalog.

use std::sync::Arc;

use axum::Router;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::get;

use storefront_cart::CartStore;
use storefront_catalog::{CatalogClient, CatalogConfig};
use storefront_core::ProductId;
use storefront_views::ProductDetailView;

struct StubCatalog {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl StubCatalog {
    async fn spawn() -> Self {
        async fn product_by_id(Path(id): Path<u64>) -> axum::response::Response {
            if id > 10 {
                return "null".into_response();
            }
            axum::Json(serde_json::json!({
                "id": id,
                "title": format!("Product {id}"),
                "price": 5.0,
                "category": "stub",
                "image": "",
                "description": "",
                "rating": { "rate": 4.0, "count": 10 }
            }))
            .into_response()
        }

        let app = Router::new().route("/products/:id", get(product_by_id));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn client(&self) -> CatalogClient {
        CatalogClient::new(CatalogConfig::new(&self.base_url))
    }
}

impl Drop for StubCatalog {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn resolves_the_route_parameter_and_mirrors_cart_quantity() {
    let stub = StubCatalog::spawn().await;
    let cart = Arc::new(CartStore::new());

    let mut view = ProductDetailView::load(&stub.client(), Arc::clone(&cart), "3").await;
    let product = view.product().expect("product should resolve").clone();
    assert_eq!(product.id, ProductId::new(3));
    assert_eq!(view.quantity(), 0);

    view.add_to_cart();
    assert_eq!(view.quantity(), 1);
    assert_eq!(cart.quantity_of(product.id), 1);

    view.increment();
    view.increment();
    assert_eq!(view.quantity(), 3);

    view.decrement();
    assert_eq!(view.quantity(), 2);
}

#[tokio::test]
async fn decrementing_to_zero_removes_and_resets_the_display() {
    let stub = StubCatalog::spawn().await;
    let cart = Arc::new(CartStore::new());

    let mut view = ProductDetailView::load(&stub.client(), Arc::clone(&cart), "1").await;
    view.add_to_cart();
    view.decrement();

    assert_eq!(view.quantity(), 0);
    assert!(cart.is_empty());
}

#[tokio::test]
async fn follows_cart_changes_made_by_other_views() {
    let stub = StubCatalog::spawn().await;
    let cart = Arc::new(CartStore::new());

    let mut view = ProductDetailView::load(&stub.client(), Arc::clone(&cart), "2").await;
    let product = view.product().unwrap().clone();

    // Another view (the listing) mutates the same product.
    cart.add(product.clone(), 1);
    cart.update_quantity(product.id, 4);

    view.sync_from_cart();
    assert_eq!(view.quantity(), 5);

    cart.remove(product.id);
    view.sync_from_cart();
    assert_eq!(view.quantity(), 0);
}

#[tokio::test]
async fn a_missing_product_is_a_terminal_not_found_state() {
    let stub = StubCatalog::spawn().await;
    let cart = Arc::new(CartStore::new());

    let mut view = ProductDetailView::load(&stub.client(), Arc::clone(&cart), "999").await;
    assert_eq!(view.state().failure(), Some("Product not found"));
    assert_eq!(view.quantity(), 0);

    // Actions on a failed view are no-ops.
    view.add_to_cart();
    view.increment();
    assert!(cart.is_empty());
}

#[tokio::test]
async fn an_unparseable_route_parameter_is_not_found() {
    let stub = StubCatalog::spawn().await;
    let cart = Arc::new(CartStore::new());

    let view = ProductDetailView::load(&stub.client(), Arc::clone(&cart), "not-a-number").await;
    assert_eq!(view.state().failure(), Some("Product not found"));
}

#[tokio::test]
async fn an_unreachable_catalog_is_a_terminal_load_failure() {
    let cart = Arc::new(CartStore::new());
    let client = CatalogClient::new(CatalogConfig::new("http://127.0.0.1:1"));

    let view = ProductDetailView::load(&client, cart, "1").await;
    assert_eq!(view.state().failure(), Some("Failed to load product"));
}
