//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart_store::CartStore;
use crate::catalog::CatalogService;
use crate::config::ShopConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the session-scoped catalog service, and the cart store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ShopConfig,
    catalog: CatalogService,
    cart: CartStore,
}

impl AppState {
    /// Create a new application state from configuration. The catalog
    /// service's cache lives exactly as long as this state.
    #[must_use]
    pub fn new(config: ShopConfig) -> Self {
        let catalog = CatalogService::new(config.catalog_path.clone());
        let cart = CartStore::new(config.cart_path.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &ShopConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog service.
    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }
}
