//! Passthrough proxy endpoints.
//!
//! Thin forwards to the upstream catalog API. The category listing is
//! normalized to plain slugs; product payloads pass through verbatim. Any
//! upstream problem - network failure, timeout after retries, non-2xx
//! status - surfaces as HTTP 500 with the stable `{error, details?}` body.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::error::Result;
use crate::state::AppState;

/// `GET /api/categories`
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let categories = state.upstream().fetch_categories().await?;
    Ok(Json(categories))
}

/// `GET /api/products`
pub async fn products(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let payload = state.upstream().fetch_products_raw().await?;
    Ok(Json(payload))
}

/// `GET /api/products/{id}`
pub async fn product_by_id(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>> {
    let payload = state.upstream().fetch_product_raw(id).await?;
    Ok(Json(payload))
}
