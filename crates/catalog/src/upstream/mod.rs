//! Upstream catalog API client.
//!
//! The upstream API is the system of record for product and category data.
//! The client is a thin typed layer over its REST surface: every GET is
//! wrapped with the configured timeout and a bounded linear-backoff retry,
//! list and lookup responses are cached with `moka` (5-minute TTL), and
//! products are stamped with their derived `date_added` on conversion.
//!
//! Batch lookups (`fetch_many`) join parallel per-id fetches with a
//! partial-success policy: ids that fail to load are dropped with a warning
//! instead of failing the whole batch.

mod cache;
pub mod types;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use moka::future::Cache;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, instrument};
use url::Url;
use vitrine_core::{Product, ProductsPage};

use crate::config::CatalogConfig;
use crate::view::dates::date_added_for;
use cache::CacheValue;
use types::RawCategory;

const CACHE_CAPACITY: u64 = 1000;
const CACHE_TTL: Duration = Duration::from_secs(300);
const RETRY_BACKOFF: Duration = Duration::from_millis(500);
const ERROR_BODY_PREVIEW: usize = 200;

/// Errors that can occur when talking to the upstream catalog API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport failed (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not parse as the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found upstream.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl UpstreamError {
    /// Transport failures and upstream 5xx answers are worth retrying;
    /// everything else is a stable answer.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Parse(_) | Self::NotFound(_) => false,
        }
    }
}

// =============================================================================
// UpstreamClient
// =============================================================================

/// Client for the upstream catalog API.
///
/// Cheaply cloneable; list and lookup responses are cached for 5 minutes.
#[derive(Clone)]
pub struct UpstreamClient {
    inner: Arc<UpstreamClientInner>,
}

struct UpstreamClientInner {
    client: reqwest::Client,
    base_url: Url,
    attempts: u32,
    cache: Cache<String, CacheValue>,
}

impl UpstreamClient {
    /// Create a new upstream client from configuration.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created. This should never happen
    /// under normal circumstances as we use standard TLS configuration.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .expect("Failed to create HTTP client");

        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(UpstreamClientInner {
                client,
                base_url: config.upstream_url.clone(),
                attempts: config.upstream_retries.max(1),
                cache,
            }),
        }
    }

    fn url_for(&self, path_and_query: &str) -> String {
        format!(
            "{}/{}",
            self.inner.base_url.as_str().trim_end_matches('/'),
            path_and_query
        )
    }

    /// One GET attempt, no retry.
    async fn try_get(&self, url: &str) -> Result<String, UpstreamError> {
        let response = self.inner.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(ERROR_BODY_PREVIEW).collect::<String>(),
                "upstream returned non-success status"
            );
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_PREVIEW).collect(),
            });
        }
        Ok(body)
    }

    /// GET with bounded retry and linear backoff.
    async fn get_text(&self, path_and_query: &str) -> Result<String, UpstreamError> {
        let url = self.url_for(path_and_query);
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.try_get(&url).await {
                Ok(body) => return Ok(body),
                Err(e) if e.is_retryable() && attempt < self.inner.attempts => {
                    tracing::warn!(
                        url = %url,
                        attempt,
                        error = %e,
                        "upstream request failed, retrying"
                    );
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// GET and decode into `T`, logging the body on decode failure.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
    ) -> Result<T, UpstreamError> {
        let body = self.get_text(path_and_query).await?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(ERROR_BODY_PREVIEW).collect::<String>(),
                    "failed to parse upstream response"
                );
                Err(UpstreamError::Parse(e))
            }
        }
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Fetch the full product collection, stamped with derived dates.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails after retries.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, UpstreamError> {
        let cache_key = "products".to_string();

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let page: ProductsPage = self.get_json("products?limit=0").await?;
        let today = Local::now().date_naive();
        let products: Vec<Product> = page
            .products
            .into_iter()
            .map(|raw| {
                let date_added = date_added_for(raw.id, today);
                Product::from_raw(raw, date_added)
            })
            .collect();

        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Fetch a single product by id, stamped with its derived date.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn fetch_product(&self, id: u64) -> Result<Product, UpstreamError> {
        let cache_key = format!("product:{id}");

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let raw = self.get_json(&format!("products/{id}")).await?;
        let today = Local::now().date_naive();
        let product = Product::from_raw(raw, date_added_for(id, today));

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    /// Fetch several products in parallel, one request per id.
    ///
    /// Partial-success policy: ids that fail to load are dropped with a
    /// warning so a single bad id never takes down the whole view. Result
    /// order follows the input order.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn fetch_many(&self, ids: &[u64]) -> Vec<Product> {
        let mut set = JoinSet::new();
        for &id in ids {
            let client = self.clone();
            set.spawn(async move { (id, client.fetch_product(id).await) });
        }

        let mut loaded: HashMap<u64, Product> = HashMap::with_capacity(ids.len());
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((id, Ok(product))) => {
                    loaded.insert(id, product);
                }
                Ok((id, Err(e))) => {
                    tracing::warn!(id, error = %e, "dropping product from batch fetch");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "batch fetch task failed");
                }
            }
        }

        ids.iter().filter_map(|id| loaded.remove(id)).collect()
    }

    // =========================================================================
    // Category Methods
    // =========================================================================

    /// Fetch the category listing, normalized to plain slugs.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails after retries.
    #[instrument(skip(self))]
    pub async fn fetch_categories(&self) -> Result<Vec<String>, UpstreamError> {
        let cache_key = "categories".to_string();

        if let Some(CacheValue::Categories(categories)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let raw: Vec<RawCategory> = self.get_json("products/categories").await?;
        let categories: Vec<String> = raw.into_iter().filter_map(RawCategory::into_name).collect();

        self.inner
            .cache
            .insert(cache_key, CacheValue::Categories(categories.clone()))
            .await;

        Ok(categories)
    }

    // =========================================================================
    // Raw Passthrough (proxy endpoints - never cached, never reshaped)
    // =========================================================================

    /// Fetch the product listing verbatim, for the passthrough proxy.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after retries.
    #[instrument(skip(self))]
    pub async fn fetch_products_raw(&self) -> Result<serde_json::Value, UpstreamError> {
        self.get_json("products?limit=0").await
    }

    /// Fetch a single product verbatim, for the passthrough proxy.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after retries.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn fetch_product_raw(&self, id: u64) -> Result<serde_json::Value, UpstreamError> {
        self.get_json(&format!("products/{id}")).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client_for(base: &str) -> UpstreamClient {
        let config = CatalogConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            upstream_url: base.parse().unwrap(),
            upstream_timeout: Duration::from_secs(5),
            upstream_retries: 1,
            data_dir: None,
            default_theme: None,
        };
        UpstreamClient::new(&config)
    }

    #[test]
    fn test_url_for_joins_without_doubling_slashes() {
        let client = client_for("https://dummyjson.com");
        assert_eq!(
            client.url_for("products?limit=0"),
            "https://dummyjson.com/products?limit=0"
        );

        let trailing = client_for("https://dummyjson.com/");
        assert_eq!(
            trailing.url_for("products/7"),
            "https://dummyjson.com/products/7"
        );
    }

    #[test]
    fn test_retryability_classification() {
        assert!(
            UpstreamError::Status {
                status: 503,
                body: String::new()
            }
            .is_retryable()
        );
        assert!(
            !UpstreamError::Status {
                status: 400,
                body: String::new()
            }
            .is_retryable()
        );
        assert!(!UpstreamError::NotFound("x".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = UpstreamError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "upstream status 500: boom");
    }
}
