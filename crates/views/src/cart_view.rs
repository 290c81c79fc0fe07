use std::sync::Arc;

use storefront_cart::{CartItem, CartStore};
use storefront_core::{Money, ProductId};

/// The cart page: full contents and total, with removal.
#[derive(Debug, Clone)]
pub struct CartView {
    cart: Arc<CartStore>,
}

impl CartView {
    pub fn new(cart: Arc<CartStore>) -> Self {
        Self { cart }
    }

    /// Item snapshots in insertion order.
    pub fn items(&self) -> Vec<CartItem> {
        self.cart.items()
    }

    pub fn total(&self) -> Money {
        self.cart.total()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Total units across all items (the header badge).
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    pub fn remove(&self, product_id: ProductId) {
        self.cart.remove(product_id);
    }

    pub fn clear(&self) {
        self.cart.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::Product;

    fn product(id: u64, minor_units: u64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Money::from_minor_units(minor_units),
            category: "test".to_string(),
            description: String::new(),
            image: String::new(),
            rating: Default::default(),
        }
    }

    #[test]
    fn renders_contents_and_total_and_dispatches_removal() {
        let cart = Arc::new(CartStore::new());
        cart.add(product(1, 1000), 2);
        cart.add(product(2, 550), 1);

        let view = CartView::new(Arc::clone(&cart));
        assert_eq!(view.items().len(), 2);
        assert_eq!(view.total(), Money::from_minor_units(2550));
        assert_eq!(view.item_count(), 3);

        view.remove(ProductId::new(1));
        assert_eq!(view.items().len(), 1);
        assert_eq!(view.total(), Money::from_minor_units(550));

        view.clear();
        assert!(view.is_empty());
        assert_eq!(view.total(), Money::ZERO);
    }
}
