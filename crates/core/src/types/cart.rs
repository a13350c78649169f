//! Cart line-item types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// Invariant: at most one `CartItem` per product id. Created on first add,
/// quantity incremented on repeat adds, deleted when the quantity is driven
/// to zero or below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
    pub thumbnail: String,
    /// Always >= 1 while the item exists.
    pub quantity: u32,
}

/// The add-to-cart payload: a cart item without its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
    pub thumbnail: String,
}

impl CartEntry {
    /// Turn the entry into a line item with an initial quantity of 1.
    #[must_use]
    pub fn into_item(self) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            price: self.price,
            thumbnail: self.thumbnail,
            quantity: 1,
        }
    }
}

/// Total line price for an item.
#[must_use]
pub fn line_total(item: &CartItem) -> Decimal {
    item.price * Decimal::from(item.quantity)
}
