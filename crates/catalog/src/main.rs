//! Vitrine Catalog - product catalog server.
//!
//! This binary serves the catalog API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Upstream catalog REST API (dummyjson-style) as the system of record
//!   for products and categories, with timeout + bounded retry + caching
//! - Store slices (theme, favorites, cart) persisted through a pluggable
//!   key-value bridge (file-backed when `VITRINE_DATA_DIR` is set)
//! - Thin passthrough proxy endpoints under `/api`

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

mod config;
mod error;
mod routes;
mod state;
mod storage;
mod store;
mod upstream;
mod view;

use config::CatalogConfig;
use state::AppState;
use storage::{FileStorage, MemoryStorage, StorageBridge};
use store::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use upstream::UpstreamClient;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = CatalogConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vitrine_catalog=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Pick the storage bridge: durable when a data dir is configured,
    // process-local otherwise
    let bridge: Arc<dyn StorageBridge> = match &config.data_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "using file-backed store");
            Arc::new(FileStorage::new(dir))
        }
        None => {
            tracing::info!("no data dir configured, store is in-memory");
            Arc::new(MemoryStorage::new())
        }
    };

    // Hydrate the store once at startup. A server has no queryable color
    // scheme, so the host preference comes from configuration.
    let mut store = Store::new(bridge);
    store.initialize(config.default_theme);

    // Build application state
    let upstream = UpstreamClient::new(&config);
    let state = AppState::new(config.clone(), upstream, store);

    // Build router
    let app = routes::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("catalog listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
