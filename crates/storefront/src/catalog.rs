//! Catalog service: loads the static product list once per process session.
//!
//! The catalog is a JSON array of products at a fixed path. The first call
//! to [`CatalogService::products`] reads and parses it; the parsed list is
//! cached for the lifetime of the service, so later calls (from any
//! handler) return the cached list without touching the filesystem. There
//! is no expiry and no invalidation: the data is static for the session.
//!
//! A failed load is surfaced to the caller and is *not* cached, so a later
//! request retries.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;

use fashionshop_core::Product;

/// Errors loading the catalog asset.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Session-scoped catalog access with an internal load-once cache.
#[derive(Debug)]
pub struct CatalogService {
    path: PathBuf,
    cache: OnceCell<Arc<Vec<Product>>>,
}

impl CatalogService {
    /// Create a service reading from the given catalog path. Nothing is
    /// loaded until the first [`Self::products`] call.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cache: OnceCell::new(),
        }
    }

    /// The full product list, loaded on first call and cached thereafter.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog file cannot be read or parsed.
    pub async fn products(&self) -> Result<Arc<Vec<Product>>, CatalogError> {
        let products = self
            .cache
            .get_or_try_init(|| async {
                let bytes =
                    tokio::fs::read(&self.path)
                        .await
                        .map_err(|source| CatalogError::Io {
                            path: self.path.clone(),
                            source,
                        })?;
                let products: Vec<Product> =
                    serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
                        path: self.path.clone(),
                        source,
                    })?;
                tracing::info!(count = products.len(), "Catalog loaded");
                Ok(Arc::new(products))
            })
            .await?;

        Ok(Arc::clone(products))
    }

    /// Look up a product by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be loaded.
    pub async fn find(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        let products = self.products().await?;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    /// All products in a category.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be loaded.
    pub async fn by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        let products = self.products().await?;
        Ok(products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    /// All products carrying the given offer tag.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be loaded.
    pub async fn by_offer(&self, offer: &str) -> Result<Vec<Product>, CatalogError> {
        let products = self.products().await?;
        Ok(products
            .iter()
            .filter(|p| p.offer.as_deref() == Some(offer))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_catalog(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "fashionshop-catalog-{}-{name}.json",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    const TWO_PRODUCTS: &str = r#"[
        {"id": "p1", "name": "Red Shirt", "category": "men", "price": 20,
         "rating": 4.6, "sizes": ["M"], "colors": ["red"], "image": "/p1.jpg"},
        {"id": "p2", "name": "Summer Dress", "category": "women", "price": 45,
         "rating": 4.8, "sizes": ["S"], "colors": ["yellow"], "image": "/p2.jpg",
         "offer": "summer_sale"}
    ]"#;

    #[tokio::test]
    async fn test_products_loads_and_parses() {
        let path = temp_catalog("loads", TWO_PRODUCTS);
        let service = CatalogService::new(path);

        let products = service.products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products.first().unwrap().id, "p1");
    }

    #[tokio::test]
    async fn test_products_cached_across_calls() {
        let path = temp_catalog("cached", TWO_PRODUCTS);
        let service = CatalogService::new(path.clone());

        let first = service.products().await.unwrap();
        assert_eq!(first.len(), 2);

        // The file changing on disk must not be observed within the session.
        std::fs::write(&path, "[]").unwrap();
        let second = service.products().await.unwrap();
        assert_eq!(second.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_io_error() {
        let service = CatalogService::new(PathBuf::from("/nonexistent/products.json"));
        let err = service.products().await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_parse_error() {
        let path = temp_catalog("malformed", "{not json");
        let service = CatalogService::new(path);
        let err = service.products().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_failed_load_retries() {
        let path = std::env::temp_dir().join(format!(
            "fashionshop-catalog-{}-retry.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let service = CatalogService::new(path.clone());
        assert!(service.products().await.is_err());

        std::fs::write(&path, TWO_PRODUCTS).unwrap();
        let products = service.products().await.unwrap();
        assert_eq!(products.len(), 2);
    }

    #[tokio::test]
    async fn test_find_and_filters() {
        let path = temp_catalog("find", TWO_PRODUCTS);
        let service = CatalogService::new(path);

        assert_eq!(service.find("p2").await.unwrap().unwrap().name, "Summer Dress");
        assert!(service.find("missing").await.unwrap().is_none());

        let men = service.by_category("men").await.unwrap();
        assert_eq!(men.len(), 1);

        let sale = service.by_offer("summer_sale").await.unwrap();
        assert_eq!(sale.len(), 1);
        assert_eq!(sale.first().unwrap().id, "p2");
    }
}
