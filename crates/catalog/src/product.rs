use serde::{Deserialize, Serialize};

use storefront_core::{Money, ProductId};

/// Customer rating as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Rating {
    pub rate: f64,
    #[serde(default)]
    pub count: u64,
}

/// A product record, sourced verbatim from the remote catalog.
///
/// Immutable from the application's perspective: the storefront never
/// creates, updates, or deletes products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Decimal major units on the wire, minor units internally.
    pub price: Money,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}
