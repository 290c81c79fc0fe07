//! Catalog client error model.

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure of a catalog read.
///
/// There is no retry or recovery policy: callers surface these as a
/// terminal error state for the view that requested the data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure or a non-success HTTP status.
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog has no product with the requested identifier.
    #[error("product not found")]
    NotFound,

    /// The catalog answered, but the payload did not parse.
    #[error("catalog payload did not parse: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound)
    }
}
