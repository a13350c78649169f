//! Application state container.
//!
//! The store owns three independent slices - theme, favorites, cart - each
//! with its own mutation operations. Slices hydrate once from the storage
//! bridge at startup and mirror every mutation straight back through it;
//! writes are synchronous and never batched, so the last write before any
//! read-back always wins.
//!
//! The container is constructor-injected and single-writer: the server holds
//! it behind one `RwLock`, and every mutation runs to completion before the
//! next begins. Derived values (cart totals, catalog views) are never stored
//! here - they are recomputed from current state on demand.

mod cart;
mod favorites;
mod theme;

use std::sync::Arc;

pub use cart::CartSlice;
pub use favorites::FavoritesSlice;
pub use theme::{DiscardSink, ThemeSink, ThemeSlice};
use vitrine_core::Theme;

use crate::storage::StorageBridge;

/// The state container: theme, favorites, and cart slices over one bridge.
pub struct Store {
    pub theme: ThemeSlice,
    pub favorites: FavoritesSlice,
    pub cart: CartSlice,
}

impl Store {
    /// Create a store over `bridge` with an inert theme sink.
    #[must_use]
    pub fn new(bridge: Arc<dyn StorageBridge>) -> Self {
        Self::with_sink(bridge, Arc::new(DiscardSink))
    }

    /// Create a store over `bridge` with an explicit theme sink.
    #[must_use]
    pub fn with_sink(bridge: Arc<dyn StorageBridge>, sink: Arc<dyn ThemeSink>) -> Self {
        Self {
            theme: ThemeSlice::new(Arc::clone(&bridge), sink),
            favorites: FavoritesSlice::new(Arc::clone(&bridge)),
            cart: CartSlice::new(bridge),
        }
    }

    /// Run every slice's initializer once, hydrating from the bridge.
    pub fn initialize(&mut self, host_theme_preference: Option<Theme>) {
        self.theme.initialize(host_theme_preference);
        self.favorites.initialize();
        self.cart.initialize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, NullStorage};

    #[test]
    fn test_store_hydrates_every_slice() {
        let bridge = MemoryStorage::new();
        bridge.write("theme", "dark");
        bridge.write("favorites", "[4]");
        bridge.write("cart", r#"[{"id":4,"title":"T","price":"1.00","thumbnail":"t.png","quantity":2}]"#);

        let mut store = Store::new(Arc::new(bridge));
        store.initialize(None);

        assert_eq!(store.theme.current(), Theme::Dark);
        assert!(store.favorites.is_favorite(4));
        assert_eq!(store.cart.total_items(), 2);
    }

    #[test]
    fn test_store_over_null_bridge_starts_empty_and_stays_total() {
        let mut store = Store::new(Arc::new(NullStorage));
        store.initialize(None);

        assert_eq!(store.theme.current(), Theme::Light);
        store.theme.toggle();
        store.favorites.toggle(1);
        assert!(store.favorites.is_favorite(1));
        assert!(store.cart.items().is_empty());
    }
}
