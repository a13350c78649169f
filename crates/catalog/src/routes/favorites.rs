//! Favorites route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use vitrine_core::Product;

use crate::state::AppState;

/// Toggle request body.
#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub id: u64,
}

/// Result of a toggle: the id's new membership plus the full set.
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub id: u64,
    pub favorite: bool,
    pub favorites: Vec<u64>,
}

/// `GET /favorites` - the favorited products, fetched in parallel.
///
/// Ids that fail to load upstream are dropped rather than failing the whole
/// view, so this handler is infallible.
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    let ids: Vec<u64> = state.store().read().await.favorites.ids().to_vec();
    let products = state.upstream().fetch_many(&ids).await;
    Json(products)
}

/// `GET /favorites/ids`
pub async fn ids(State(state): State<AppState>) -> Json<Vec<u64>> {
    let store = state.store().read().await;
    Json(store.favorites.ids().to_vec())
}

/// `POST /favorites/toggle`
pub async fn toggle(
    State(state): State<AppState>,
    Json(request): Json<ToggleRequest>,
) -> Json<ToggleResponse> {
    let mut store = state.store().write().await;
    let favorite = store.favorites.toggle(request.id);
    Json(ToggleResponse {
        id: request.id,
        favorite,
        favorites: store.favorites.ids().to_vec(),
    })
}
