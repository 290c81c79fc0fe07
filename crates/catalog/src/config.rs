//! Catalog client configuration.

/// The public demo catalog used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Environment variable overriding the catalog base URL.
pub const BASE_URL_ENV: &str = "STOREFRONT_CATALOG_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    base_url: String,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read configuration from the environment, falling back to the demo
    /// catalog.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_normalized() {
        let config = CatalogConfig::new("http://localhost:9000///");
        assert_eq!(config.base_url(), "http://localhost:9000");
    }

    #[test]
    fn defaults_to_the_demo_catalog() {
        assert_eq!(CatalogConfig::default().base_url(), DEFAULT_BASE_URL);
    }
}
