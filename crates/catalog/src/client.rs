//! HTTP client for the remote product catalog.

use serde::de::DeserializeOwned;

use storefront_core::ProductId;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::product::Product;

/// Read-only catalog client.
///
/// Wraps a `reqwest::Client`; all reads are single-shot (no retry, no
/// caching). Cheap to clone.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// `GET /products` — the full product sequence, in catalog order.
    pub async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        self.get_json("/products".to_string()).await
    }

    /// `GET /products/categories` — the category labels.
    pub async fn fetch_categories(&self) -> CatalogResult<Vec<String>> {
        self.get_json("/products/categories".to_string()).await
    }

    /// `GET /products/{id}` — a single product.
    ///
    /// The demo catalog answers unknown ids with HTTP 200 and a `null`
    /// body; both that and a 404 map to [`CatalogError::NotFound`].
    pub async fn fetch_product(&self, id: ProductId) -> CatalogResult<Product> {
        let body = self.get_text(format!("/products/{id}")).await?;
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            tracing::warn!(product_id = %id, "catalog has no such product");
            return Err(CatalogError::NotFound);
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: String) -> CatalogResult<T> {
        let body = self.get_text(path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_text(&self, path: String) -> CatalogResult<String> {
        let url = format!("{}{}", self.config.base_url(), path);
        tracing::debug!(%url, "catalog read");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(%url, error = %e, "catalog request failed"))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::warn!(%url, "catalog answered 404");
            return Err(CatalogError::NotFound);
        }

        let response = response
            .error_for_status()
            .inspect_err(|e| tracing::warn!(%url, error = %e, "catalog answered an error status"))?;

        Ok(response.text().await?)
    }
}
