//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::CatalogConfig;
use crate::store::Store;
use crate::upstream::UpstreamClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The store sits behind a single `RwLock`, so
/// mutations are single-writer and each runs to completion (including its
/// synchronous mirror through the storage bridge) before the next begins.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CatalogConfig,
    upstream: UpstreamClient,
    store: RwLock<Store>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: CatalogConfig, upstream: UpstreamClient, store: Store) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                upstream,
                store: RwLock::new(store),
            }),
        }
    }

    /// Get a reference to the catalog configuration.
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    /// Get a reference to the upstream API client.
    #[must_use]
    pub fn upstream(&self) -> &UpstreamClient {
        &self.inner.upstream
    }

    /// Get a reference to the store lock.
    #[must_use]
    pub fn store(&self) -> &RwLock<Store> {
        &self.inner.store
    }
}
