//! Theme route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use vitrine_core::Theme;

use crate::state::AppState;

/// The current theme.
#[derive(Debug, Serialize, Deserialize)]
pub struct ThemePayload {
    pub theme: Theme,
}

/// `GET /theme`
pub async fn show(State(state): State<AppState>) -> Json<ThemePayload> {
    let store = state.store().read().await;
    Json(ThemePayload {
        theme: store.theme.current(),
    })
}

/// `PUT /theme`
pub async fn set(
    State(state): State<AppState>,
    Json(payload): Json<ThemePayload>,
) -> Json<ThemePayload> {
    let mut store = state.store().write().await;
    store.theme.set(payload.theme);
    Json(ThemePayload {
        theme: store.theme.current(),
    })
}

/// `POST /theme/toggle`
pub async fn toggle(State(state): State<AppState>) -> Json<ThemePayload> {
    let mut store = state.store().write().await;
    let theme = store.theme.toggle();
    Json(ThemePayload { theme })
}
