//! Integration tests for Vitrine.
//!
//! Each test spins up a stub upstream catalog API and the real application
//! router on ephemeral ports, then drives the HTTP surface with `reqwest`.
//!
//! # Test Categories
//!
//! - `proxy_routes` - Passthrough proxy endpoints and error shaping
//! - `catalog_routes` - Filtered/paginated views and the chart series
//! - `store_routes` - Cart, favorites, and theme state over HTTP

use std::sync::Arc;

use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
use vitrine_catalog::config::CatalogConfig;
use vitrine_catalog::routes;
use vitrine_catalog::state::AppState;
use vitrine_catalog::storage::MemoryStorage;
use vitrine_catalog::store::Store;
use vitrine_catalog::upstream::UpstreamClient;

/// A running application plus handles to poke at it.
pub struct TestContext {
    pub client: reqwest::Client,
    pub base_url: String,
    /// The bridge behind the store, for asserting persisted state.
    pub bridge: MemoryStorage,
}

impl TestContext {
    /// Start the app against a healthy stub upstream.
    pub async fn new() -> Self {
        let upstream_url = serve(upstream_stub()).await;
        Self::with_upstream_url(&upstream_url).await
    }

    /// Start the app against an upstream that answers 500 to everything.
    pub async fn with_failing_upstream() -> Self {
        let upstream_url = serve(failing_upstream_stub()).await;
        Self::with_upstream_url(&upstream_url).await
    }

    /// Start the app against an arbitrary upstream base URL.
    pub async fn with_upstream_url(upstream_url: &str) -> Self {
        let config = CatalogConfig {
            host: "127.0.0.1".parse().expect("host"),
            port: 0,
            upstream_url: upstream_url.parse().expect("upstream url"),
            upstream_timeout: std::time::Duration::from_secs(5),
            upstream_retries: 1,
            data_dir: None,
            default_theme: None,
        };

        let bridge = MemoryStorage::new();
        let mut store = Store::new(Arc::new(bridge.clone()));
        store.initialize(None);

        let upstream = UpstreamClient::new(&config);
        let state = AppState::new(config, upstream, store);
        let base_url = serve(routes::app(state)).await;

        Self {
            client: reqwest::Client::new(),
            base_url,
            bridge,
        }
    }

    /// GET a path and decode the JSON body.
    pub async fn get_json(&self, path: &str) -> serde_json::Value {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("request");
        assert!(
            response.status().is_success(),
            "GET {path} returned {}",
            response.status()
        );
        response.json().await.expect("json body")
    }

    /// POST a JSON body to a path and decode the JSON response.
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> serde_json::Value {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
            .expect("request");
        assert!(
            response.status().is_success(),
            "POST {path} returned {}",
            response.status()
        );
        response.json().await.expect("json body")
    }
}

/// Bind a router on an ephemeral port and serve it in the background.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

/// The canned product collection the stub upstream serves.
///
/// Twelve products: "Red Shirt" (clothing), "Blue Hat" (accessories), and
/// ten widgets - enough to exercise query, category, and page boundaries.
#[must_use]
pub fn sample_products() -> Vec<serde_json::Value> {
    let mut products = vec![
        sample_product(1, "Red Shirt", "clothing"),
        sample_product(2, "Blue Hat", "accessories"),
    ];
    for id in 3..=12 {
        products.push(sample_product(id, &format!("Widget {id}"), "widgets"));
    }
    products
}

fn sample_product(id: u64, title: &str, category: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "description": format!("Description of {title}"),
        "price": 9.99,
        "discountPercentage": 5.5,
        "rating": 4.2,
        "stock": 40,
        "brand": "Acme",
        "category": category,
        "thumbnail": format!("https://cdn.example.com/{id}.png"),
        "images": [format!("https://cdn.example.com/{id}-full.png")],
        "sku": format!("SKU-{id}")
    })
}

/// A stub upstream that mimics the dummyjson REST shape.
#[must_use]
pub fn upstream_stub() -> Router {
    Router::new()
        .route(
            "/products",
            get(|| async {
                let products = sample_products();
                let total = products.len();
                Json(serde_json::json!({
                    "products": products,
                    "total": total,
                    "skip": 0,
                    "limit": 0
                }))
            }),
        )
        .route(
            "/products/categories",
            get(|| async {
                // Object entries, as current upstream versions return them.
                Json(serde_json::json!([
                    { "slug": "clothing", "name": "Clothing", "url": "https://upstream/clothing" },
                    { "slug": "accessories", "name": "Accessories", "url": "https://upstream/accessories" },
                    { "name": "Widgets" }
                ]))
            }),
        )
        .route(
            "/products/{id}",
            get(|Path(id): Path<u64>| async move {
                sample_products()
                    .into_iter()
                    .find(|p| p["id"] == serde_json::json!(id))
                    .map(Json)
                    .ok_or(StatusCode::NOT_FOUND)
            }),
        )
}

/// A stub upstream where every endpoint fails.
#[must_use]
pub fn failing_upstream_stub() -> Router {
    Router::new().fallback(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream down") })
}
