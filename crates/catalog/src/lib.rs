//! `storefront-catalog` — read-only client for the remote product catalog.
//!
//! The catalog is an external collaborator: products are fetched verbatim,
//! never written. Single-shot reads, no retry, no caching, no rate limiting.

pub mod client;
pub mod config;
pub mod error;
pub mod product;

pub use client::CatalogClient;
pub use config::{BASE_URL_ENV, CatalogConfig};
pub use error::{CatalogError, CatalogResult};
pub use product::{Product, Rating};
