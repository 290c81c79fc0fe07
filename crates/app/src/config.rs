//! Session configuration.

use anyhow::Context;

use storefront_catalog::{BASE_URL_ENV, CatalogConfig};

/// Everything a [`crate::Storefront`] needs to start.
#[derive(Debug, Clone, Default)]
pub struct StorefrontConfig {
    pub catalog: CatalogConfig,
}

impl StorefrontConfig {
    pub fn new(catalog: CatalogConfig) -> Self {
        Self { catalog }
    }

    /// Load from the environment.
    ///
    /// `STOREFRONT_CATALOG_URL` overrides the catalog base URL; unset or
    /// blank falls back to the demo catalog.
    pub fn from_env() -> anyhow::Result<Self> {
        let catalog = match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => CatalogConfig::new(url),
            Ok(_) | Err(std::env::VarError::NotPresent) => CatalogConfig::default(),
            Err(error) => {
                return Err(error).with_context(|| format!("reading {BASE_URL_ENV}"));
            }
        };
        Ok(Self { catalog })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_demo_catalog() {
        let config = StorefrontConfig::default();
        assert_eq!(config.catalog, CatalogConfig::default());
    }
}
