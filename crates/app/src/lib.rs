//! `storefront-app` — composition root.
//!
//! A [`Storefront`] owns the catalog client and the shared cart store for
//! one session and hands out the views, all reading and mutating that one
//! store. This replaces the original's global store: the container is
//! explicit and injectable, and state is reachable only through the cart
//! store's operation set.

pub mod config;

pub use config::StorefrontConfig;

use std::sync::Arc;

use storefront_cart::CartStore;
use storefront_catalog::{CatalogClient, CatalogResult};
use storefront_core::SessionId;
use storefront_views::{CartView, ProductDetailView, ProductListView};

/// One storefront session: a catalog client plus the session-lived cart.
///
/// The cart is created empty at construction and dropped with the session;
/// nothing is persisted.
#[derive(Debug)]
pub struct Storefront {
    session_id: SessionId,
    client: CatalogClient,
    cart: Arc<CartStore>,
}

impl Storefront {
    pub fn new(config: StorefrontConfig) -> Self {
        let session_id = SessionId::new();
        tracing::info!(
            %session_id,
            catalog = config.catalog.base_url(),
            "storefront session started"
        );
        Self {
            session_id,
            client: CatalogClient::new(config.catalog),
            cart: Arc::new(CartStore::new()),
        }
    }

    /// Construct from environment configuration.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(StorefrontConfig::from_env()?))
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// The shared cart store, for embedders that need direct access (e.g.
    /// a header badge reading `item_count`).
    pub fn cart(&self) -> &Arc<CartStore> {
        &self.cart
    }

    /// The listing page: fetches products and categories.
    pub async fn product_list(&self) -> CatalogResult<ProductListView> {
        ProductListView::load(&self.client, Arc::clone(&self.cart)).await
    }

    /// The detail page for a route parameter (`/products/{id}`).
    pub async fn product_detail(&self, route_param: &str) -> ProductDetailView {
        ProductDetailView::load(&self.client, Arc::clone(&self.cart), route_param).await
    }

    /// The cart page.
    pub fn cart_view(&self) -> CartView {
        CartView::new(Arc::clone(&self.cart))
    }
}
