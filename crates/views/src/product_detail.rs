use std::sync::Arc;

use storefront_cart::{CartEvent, CartStore};
use storefront_catalog::{CatalogClient, CatalogError, Product};
use storefront_core::ProductId;
use storefront_events::Subscription;

use crate::load::LoadState;

/// Message shown when the product cannot be resolved.
const NOT_FOUND_MESSAGE: &str = "Product not found";
/// Message shown when the catalog could not be reached at all.
const LOAD_FAILED_MESSAGE: &str = "Failed to load product";

/// A single product resolved by a fresh remote fetch, keyed on a route
/// parameter.
///
/// The view mirrors its product's in-cart quantity locally and keeps the
/// mirror synchronized from the cart's notification stream: call
/// [`ProductDetailView::sync_from_cart`] whenever notifications may be
/// pending (the view's own mutation methods do so themselves).
#[derive(Debug)]
pub struct ProductDetailView {
    cart: Arc<CartStore>,
    events: Subscription<CartEvent>,
    state: LoadState<Product>,
    quantity: u32,
}

impl ProductDetailView {
    /// Resolve `route_param` (e.g. the `{id}` of `/products/{id}`) and
    /// fetch the product.
    ///
    /// Both an unparseable parameter and a missing product degrade to a
    /// terminal not-found state; a transport failure degrades to a
    /// terminal load-failure state. The view never panics.
    pub async fn load(client: &CatalogClient, cart: Arc<CartStore>, route_param: &str) -> Self {
        // Subscribe before the first quantity read so no change is missed
        // between the two.
        let events = cart.subscribe();

        let Ok(id) = route_param.parse::<ProductId>() else {
            tracing::warn!(route_param, "detail route parameter did not parse");
            return Self {
                cart,
                events,
                state: LoadState::Failed(NOT_FOUND_MESSAGE.to_string()),
                quantity: 0,
            };
        };

        match client.fetch_product(id).await {
            Ok(product) => {
                let quantity = cart.quantity_of(product.id);
                Self {
                    cart,
                    events,
                    state: LoadState::Ready(product),
                    quantity,
                }
            }
            Err(CatalogError::NotFound) => Self {
                cart,
                events,
                state: LoadState::Failed(NOT_FOUND_MESSAGE.to_string()),
                quantity: 0,
            },
            Err(error) => {
                tracing::warn!(%id, %error, "product detail load failed");
                Self {
                    cart,
                    events,
                    state: LoadState::Failed(LOAD_FAILED_MESSAGE.to_string()),
                    quantity: 0,
                }
            }
        }
    }

    pub fn state(&self) -> &LoadState<Product> {
        &self.state
    }

    pub fn product(&self) -> Option<&Product> {
        self.state.ready()
    }

    /// The locally mirrored in-cart quantity; 0 when the product is not in
    /// the cart (or the view failed to load).
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Apply pending cart notifications to the quantity mirror.
    ///
    /// Idempotent: the mirror is re-read from the store, not patched from
    /// event deltas, so duplicate delivery is harmless.
    pub fn sync_from_cart(&mut self) {
        if self.events.drain() == 0 {
            return;
        }
        self.quantity = match &self.state {
            LoadState::Ready(product) => self.cart.quantity_of(product.id),
            _ => 0,
        };
    }

    /// Put one unit in the cart (no-op while loading/failed).
    pub fn add_to_cart(&mut self) {
        if let LoadState::Ready(product) = &self.state {
            self.cart.add(product.clone(), 1);
        }
        self.sync_from_cart();
    }

    pub fn increment(&mut self) {
        if let Some(id) = self.product().map(|p| p.id) {
            self.cart.update_quantity(id, 1);
        }
        self.sync_from_cart();
    }

    /// Decrement by one. Reaching zero removes the item from the cart and
    /// resets the local quantity display to zero.
    pub fn decrement(&mut self) {
        if let Some(id) = self.product().map(|p| p.id) {
            self.cart.update_quantity(id, -1);
        }
        self.sync_from_cart();
    }
}
