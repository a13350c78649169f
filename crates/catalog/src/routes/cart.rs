//! Cart route handlers.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vitrine_core::{CartEntry, CartItem};

use crate::state::AppState;
use crate::store::CartSlice;

/// Cart contents plus its derived totals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub total_items: u64,
    pub total_price: Decimal,
}

impl CartResponse {
    fn from_slice(cart: &CartSlice) -> Self {
        Self {
            items: cart.items().to_vec(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

/// Compact badge payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCount {
    pub count: u64,
    pub subtotal: Decimal,
}

/// Update-quantity request body.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub id: u64,
    pub quantity: i64,
}

/// Remove-item request body.
#[derive(Debug, Deserialize)]
pub struct RemoveRequest {
    pub id: u64,
}

/// `GET /cart`
pub async fn show(State(state): State<AppState>) -> Json<CartResponse> {
    let store = state.store().read().await;
    Json(CartResponse::from_slice(&store.cart))
}

/// `POST /cart/add`
pub async fn add(
    State(state): State<AppState>,
    Json(entry): Json<CartEntry>,
) -> Json<CartResponse> {
    let mut store = state.store().write().await;
    store.cart.add(entry);
    Json(CartResponse::from_slice(&store.cart))
}

/// `POST /cart/update`
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateQuantityRequest>,
) -> Json<CartResponse> {
    let mut store = state.store().write().await;
    store.cart.update_quantity(request.id, request.quantity);
    Json(CartResponse::from_slice(&store.cart))
}

/// `POST /cart/remove`
pub async fn remove(
    State(state): State<AppState>,
    Json(request): Json<RemoveRequest>,
) -> Json<CartResponse> {
    let mut store = state.store().write().await;
    store.cart.remove(request.id);
    Json(CartResponse::from_slice(&store.cart))
}

/// `POST /cart/clear`
pub async fn clear(State(state): State<AppState>) -> Json<CartResponse> {
    let mut store = state.store().write().await;
    store.cart.clear();
    Json(CartResponse::from_slice(&store.cart))
}

/// `GET /cart/count`
pub async fn count(State(state): State<AppState>) -> Json<CartCount> {
    let store = state.store().read().await;
    Json(CartCount {
        count: store.cart.total_items(),
        subtotal: store.cart.total_price(),
    })
}
