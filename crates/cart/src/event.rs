use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::ProductId;
use storefront_events::Event;

/// Notification of a cart mutation.
///
/// Events describe what changed, not the full cart: subscribers re-read the
/// store for authoritative state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    /// A product entered the cart.
    ItemAdded {
        product_id: ProductId,
        quantity: u32,
        occurred_at: DateTime<Utc>,
    },
    /// An in-cart item's quantity changed; `quantity` is the new value.
    QuantityChanged {
        product_id: ProductId,
        quantity: u32,
        occurred_at: DateTime<Utc>,
    },
    /// An item left the cart (explicit removal or decrement below 1).
    ItemRemoved {
        product_id: ProductId,
        occurred_at: DateTime<Utc>,
    },
    /// The whole cart was emptied at once.
    CartCleared { occurred_at: DateTime<Utc> },
}

impl CartEvent {
    /// The product this event concerns, if it concerns a single one.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            CartEvent::ItemAdded { product_id, .. }
            | CartEvent::QuantityChanged { product_id, .. }
            | CartEvent::ItemRemoved { product_id, .. } => Some(*product_id),
            CartEvent::CartCleared { .. } => None,
        }
    }
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded { .. } => "cart.item.added",
            CartEvent::QuantityChanged { .. } => "cart.item.quantity_changed",
            CartEvent::ItemRemoved { .. } => "cart.item.removed",
            CartEvent::CartCleared { .. } => "cart.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded { occurred_at, .. }
            | CartEvent::QuantityChanged { occurred_at, .. }
            | CartEvent::ItemRemoved { occurred_at, .. }
            | CartEvent::CartCleared { occurred_at } => *occurred_at,
        }
    }
}
