use std::sync::Mutex;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::{Money, ProductId};
use storefront_events::{EventBus, InMemoryEventBus, Subscription};

use crate::event::CartEvent;

/// A product snapshot paired with a positive quantity.
///
/// The full product record is carried (not just the id) so the cart view
/// can render title/price/image without re-fetching from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

/// Interior state: items in insertion order, unique by product id, plus the
/// derived running total. The total is recomputed on every mutation and is
/// never authoritative on its own.
#[derive(Debug, Default)]
struct CartState {
    items: Vec<CartItem>,
    total: Money,
}

impl CartState {
    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.product.id == product_id)
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(CartItem::line_total).sum();
    }
}

/// The cart store: authoritative, session-lived, in-memory only.
///
/// Shared as `Arc<CartStore>`; state is private and mutated only through
/// the operation set below. All operations are total functions — unknown
/// ids are silently ignored and nothing here returns an error. Every
/// mutation publishes exactly one [`CartEvent`] after the state change
/// commits.
#[derive(Debug, Default)]
pub struct CartStore {
    state: Mutex<CartState>,
    bus: InMemoryEventBus<CartEvent>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe cart mutations. Each subscriber sees every event published
    /// after it subscribed.
    pub fn subscribe(&self) -> Subscription<CartEvent> {
        self.bus.subscribe()
    }

    /// Put a product into the cart.
    ///
    /// A quantity of 0 is treated as 1: an item can never enter the cart
    /// below the minimum. If the product is already present the call is
    /// ignored — the existing item, including its accumulated quantity,
    /// wins, and no event is published. Callers adjust existing items via
    /// [`CartStore::update_quantity`].
    pub fn add(&self, product: Product, quantity: u32) {
        let quantity = quantity.max(1);
        let product_id = product.id;

        let event = {
            let Ok(mut state) = self.state.lock() else { return };
            if state.position(product_id).is_some() {
                tracing::debug!(%product_id, "already in cart, add ignored");
                return;
            }
            state.items.push(CartItem { product, quantity });
            state.recompute_total();
            CartEvent::ItemAdded {
                product_id,
                quantity,
                occurred_at: Utc::now(),
            }
        };

        tracing::debug!(%product_id, quantity, "item added");
        self.publish(event);
    }

    /// Delete the item with this id, if present.
    pub fn remove(&self, product_id: ProductId) {
        let event = {
            let Ok(mut state) = self.state.lock() else { return };
            let Some(pos) = state.position(product_id) else { return };
            state.items.remove(pos);
            state.recompute_total();
            CartEvent::ItemRemoved {
                product_id,
                occurred_at: Utc::now(),
            }
        };

        tracing::debug!(%product_id, "item removed");
        self.publish(event);
    }

    /// Add `delta` (signed) to an item's quantity.
    ///
    /// A resulting quantity of 0 or less removes the item — it is never
    /// retained at a non-positive value. No-op if the id is not in the
    /// cart.
    pub fn update_quantity(&self, product_id: ProductId, delta: i64) {
        let event = {
            let Ok(mut state) = self.state.lock() else { return };
            let Some(pos) = state.position(product_id) else { return };

            let new_quantity = i64::from(state.items[pos].quantity).saturating_add(delta);
            let event = if new_quantity <= 0 {
                state.items.remove(pos);
                CartEvent::ItemRemoved {
                    product_id,
                    occurred_at: Utc::now(),
                }
            } else {
                let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
                state.items[pos].quantity = quantity;
                CartEvent::QuantityChanged {
                    product_id,
                    quantity,
                    occurred_at: Utc::now(),
                }
            };
            state.recompute_total();
            event
        };

        tracing::debug!(%product_id, delta, "quantity updated");
        self.publish(event);
    }

    /// Empty the cart. Publishes a single notification; no-op when the
    /// cart is already empty.
    pub fn clear(&self) {
        let event = {
            let Ok(mut state) = self.state.lock() else { return };
            if state.items.is_empty() {
                return;
            }
            state.items.clear();
            state.recompute_total();
            CartEvent::CartCleared {
                occurred_at: Utc::now(),
            }
        };

        tracing::debug!("cart cleared");
        self.publish(event);
    }

    /// The running total: Σ price × quantity over current items.
    pub fn total(&self) -> Money {
        self.state.lock().map(|s| s.total).unwrap_or_default()
    }

    /// Item snapshots in insertion order.
    pub fn items(&self) -> Vec<CartItem> {
        self.state.lock().map(|s| s.items.clone()).unwrap_or_default()
    }

    /// In-cart quantity for a product; 0 when absent.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.state
            .lock()
            .map(|s| {
                s.position(product_id)
                    .map(|pos| s.items[pos].quantity)
                    .unwrap_or(0)
            })
            .unwrap_or(0)
    }

    /// Total units across all items (the header cart badge).
    pub fn item_count(&self) -> u64 {
        self.state
            .lock()
            .map(|s| s.items.iter().map(|item| u64::from(item.quantity)).sum())
            .unwrap_or(0)
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.state.lock().map(|s| s.items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn publish(&self, event: CartEvent) {
        if self.bus.publish(event).is_err() {
            tracing::warn!("cart notification dropped");
        }
    }
}
