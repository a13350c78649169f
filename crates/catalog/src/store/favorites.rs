//! Favorites slice.

use std::sync::Arc;

use crate::storage::StorageBridge;

pub(crate) const FAVORITES_KEY: &str = "favorites";

/// Tracks the set of favorited product ids.
///
/// Stored as an ordered sequence with uniqueness enforced; order is
/// insertion order, preserved only incidentally.
pub struct FavoritesSlice {
    favorites: Vec<u64>,
    bridge: Arc<dyn StorageBridge>,
}

impl FavoritesSlice {
    pub(super) fn new(bridge: Arc<dyn StorageBridge>) -> Self {
        Self {
            favorites: Vec::new(),
            bridge,
        }
    }

    /// Hydrate from the bridge; malformed data yields an empty set.
    ///
    /// Duplicates in the stored sequence (possible only through outside
    /// edits) are dropped on load, keeping the first occurrence.
    pub fn initialize(&mut self) {
        self.favorites.clear();
        let Some(raw) = self.bridge.read(FAVORITES_KEY) else {
            return;
        };
        match serde_json::from_str::<Vec<u64>>(&raw) {
            Ok(ids) => {
                for id in ids {
                    if !self.favorites.contains(&id) {
                        self.favorites.push(id);
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed persisted favorites");
            }
        }
    }

    /// Flip membership of `id` and persist. Returns the new membership.
    pub fn toggle(&mut self, id: u64) -> bool {
        let now_favorite = if let Some(pos) = self.favorites.iter().position(|&f| f == id) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(id);
            true
        };
        self.persist();
        now_favorite
    }

    /// Membership test; no mutation, no persistence.
    #[must_use]
    pub fn is_favorite(&self, id: u64) -> bool {
        self.favorites.contains(&id)
    }

    #[must_use]
    pub fn ids(&self) -> &[u64] {
        &self.favorites
    }

    fn persist(&self) {
        match serde_json::to_string(&self.favorites) {
            Ok(json) => self.bridge.write(FAVORITES_KEY, &json),
            Err(e) => tracing::warn!(error = %e, "failed to serialize favorites"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn slice(bridge: &MemoryStorage) -> FavoritesSlice {
        FavoritesSlice::new(Arc::new(bridge.clone()))
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let bridge = MemoryStorage::new();
        let mut favorites = slice(&bridge);
        favorites.initialize();

        assert!(!favorites.is_favorite(42));
        assert!(favorites.toggle(42));
        assert!(favorites.is_favorite(42));
        assert!(!favorites.toggle(42));
        assert!(!favorites.is_favorite(42));
    }

    #[test]
    fn test_toggle_persists_every_mutation() {
        let bridge = MemoryStorage::new();
        let mut favorites = slice(&bridge);
        favorites.initialize();

        favorites.toggle(1);
        favorites.toggle(2);
        assert_eq!(bridge.read(FAVORITES_KEY).as_deref(), Some("[1,2]"));

        favorites.toggle(1);
        assert_eq!(bridge.read(FAVORITES_KEY).as_deref(), Some("[2]"));
    }

    #[test]
    fn test_initialize_round_trips_through_bridge() {
        let bridge = MemoryStorage::new();
        {
            let mut favorites = slice(&bridge);
            favorites.initialize();
            favorites.toggle(5);
            favorites.toggle(9);
        }
        let mut rehydrated = slice(&bridge);
        rehydrated.initialize();
        assert_eq!(rehydrated.ids(), &[5, 9]);
    }

    #[test]
    fn test_malformed_persisted_favorites_yield_empty_set() {
        let bridge = MemoryStorage::new();
        bridge.write(FAVORITES_KEY, "{not json");
        let mut favorites = slice(&bridge);
        favorites.initialize();
        assert!(favorites.ids().is_empty());
    }

    #[test]
    fn test_duplicates_in_stored_data_are_dropped() {
        let bridge = MemoryStorage::new();
        bridge.write(FAVORITES_KEY, "[3,3,7,3]");
        let mut favorites = slice(&bridge);
        favorites.initialize();
        assert_eq!(favorites.ids(), &[3, 7]);
    }
}
