//! Cart slice.

use std::sync::Arc;

use rust_decimal::Decimal;
use vitrine_core::{CartEntry, CartItem, cart::line_total};

use crate::storage::StorageBridge;

pub(crate) const CART_KEY: &str = "cart";

/// Tracks cart line items, at most one per product id.
pub struct CartSlice {
    items: Vec<CartItem>,
    bridge: Arc<dyn StorageBridge>,
}

impl CartSlice {
    pub(super) fn new(bridge: Arc<dyn StorageBridge>) -> Self {
        Self {
            items: Vec::new(),
            bridge,
        }
    }

    /// Hydrate from the bridge; malformed data yields an empty cart.
    pub fn initialize(&mut self) {
        self.items.clear();
        let Some(raw) = self.bridge.read(CART_KEY) else {
            return;
        };
        match serde_json::from_str::<Vec<CartItem>>(&raw) {
            Ok(items) => self.items = items,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed persisted cart");
            }
        }
    }

    /// Add an item: an existing id gains quantity 1, a new id is appended
    /// with quantity 1. Persists.
    pub fn add(&mut self, entry: CartEntry) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == entry.id) {
            item.quantity += 1;
        } else {
            self.items.push(entry.into_item());
        }
        self.persist();
    }

    /// Delete the matching item, if any. Absent ids are a no-op, not an
    /// error. Persists.
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
        self.persist();
    }

    /// Set the quantity for `id`; a quantity of zero or below deletes the
    /// item. Unknown ids are a no-op. Persists.
    pub fn update_quantity(&mut self, id: u64, quantity: i64) {
        if quantity <= 0 {
            self.items.retain(|item| item.id != id);
        } else if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        self.persist();
    }

    /// Empty the cart and erase the persisted slot entirely (the slot is
    /// removed, not rewritten as an empty list).
    pub fn clear(&mut self) {
        self.items.clear();
        self.bridge.remove(CART_KEY);
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of quantities across all line items.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of price x quantity across all line items.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(line_total).sum()
    }

    fn persist(&self) {
        match serde_json::to_string(&self.items) {
            Ok(json) => self.bridge.write(CART_KEY, &json),
            Err(e) => tracing::warn!(error = %e, "failed to serialize cart"),
        }
    }
}
