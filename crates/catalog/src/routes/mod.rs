//! HTTP route handlers for the catalog server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (pings upstream)
//!
//! # Proxy (forwards to the upstream catalog API)
//! GET  /api/categories         - Category listing, normalized to slugs
//! GET  /api/products           - Product listing, verbatim
//! GET  /api/products/{id}      - Single product, verbatim
//!
//! # Catalog views (derived from the fetched collection)
//! GET  /catalog                - Filtered, paginated product page
//! GET  /catalog/chart          - Cumulative products-over-time series
//!
//! # Cart
//! GET  /cart                   - Cart contents with totals
//! POST /cart/add               - Add an item (repeat add bumps quantity)
//! POST /cart/update            - Set a quantity (<= 0 removes)
//! POST /cart/remove            - Remove an item
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Item count and subtotal
//!
//! # Favorites
//! GET  /favorites              - Favorited products (parallel fetch)
//! GET  /favorites/ids          - Favorited ids only
//! POST /favorites/toggle       - Flip membership of an id
//!
//! # Theme
//! GET  /theme                  - Current theme
//! PUT  /theme                  - Set the theme
//! POST /theme/toggle           - Flip light/dark
//! ```

pub mod cart;
pub mod catalog;
pub mod favorites;
pub mod proxy;
pub mod theme;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Create the proxy routes router.
pub fn proxy_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(proxy::categories))
        .route("/products", get(proxy::products))
        .route("/products/{id}", get(proxy::product_by_id))
}

/// Create the catalog view routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/chart", get(catalog::chart))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the favorites routes router.
pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::index))
        .route("/ids", get(favorites::ids))
        .route("/toggle", post(favorites::toggle))
}

/// Create the theme routes router.
pub fn theme_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(theme::show).put(theme::set))
        .route("/toggle", post(theme::toggle))
}

/// Create all routes for the catalog server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api", proxy_routes())
        .nest("/catalog", catalog_routes())
        .nest("/cart", cart_routes())
        .nest("/favorites", favorites_routes())
        .nest("/theme", theme_routes())
}

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the upstream catalog API is reachable before returning OK.
/// Returns 503 Service Unavailable when it is not.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.upstream().fetch_categories().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
