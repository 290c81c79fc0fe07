//! `storefront-cart` — the cart store.
//!
//! The single source of truth for cart contents across all views: an
//! ordered collection of items plus the derived running total, mutated only
//! through the defined operation set, with every mutation published as a
//! [`CartEvent`] notification.

pub mod event;
pub mod store;

pub use event::CartEvent;
pub use store::{CartItem, CartStore};
