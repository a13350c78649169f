//! Catalog configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VITRINE_HOST` - Bind address (default: 127.0.0.1)
//! - `VITRINE_PORT` - Listen port (default: 3000)
//! - `VITRINE_UPSTREAM_URL` - Upstream catalog API base URL
//!   (default: `https://dummyjson.com`)
//! - `VITRINE_UPSTREAM_TIMEOUT_SECS` - Per-request timeout (default: 30)
//! - `VITRINE_UPSTREAM_RETRIES` - Attempts per upstream request (default: 3)
//! - `VITRINE_DATA_DIR` - Directory for the persisted store; when unset the
//!   store lives in memory for the lifetime of the process
//! - `VITRINE_DEFAULT_THEME` - Theme adopted when none is persisted
//!   (`light` or `dark`)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;
use vitrine_core::Theme;

const DEFAULT_UPSTREAM_URL: &str = "https://dummyjson.com";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
const DEFAULT_UPSTREAM_RETRIES: u32 = 3;

/// Configuration errors that can occur during loading.
///
/// Every variable has a default, so the only failure mode is a value that
/// does not parse.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog application configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Base URL of the upstream catalog API
    pub upstream_url: Url,
    /// Per-request timeout for upstream calls
    pub upstream_timeout: Duration,
    /// Attempts per upstream request (first try + retries)
    pub upstream_retries: u32,
    /// Directory for the persisted store; `None` keeps state in memory
    pub data_dir: Option<PathBuf>,
    /// Theme adopted when no theme is persisted
    pub default_theme: Option<Theme>,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("VITRINE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("VITRINE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("VITRINE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("VITRINE_PORT".to_string(), e.to_string()))?;
        let upstream_url = get_env_or_default("VITRINE_UPSTREAM_URL", DEFAULT_UPSTREAM_URL)
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("VITRINE_UPSTREAM_URL".to_string(), e.to_string())
            })?;
        let upstream_timeout = get_env_or_default(
            "VITRINE_UPSTREAM_TIMEOUT_SECS",
            &DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| {
            ConfigError::InvalidEnvVar("VITRINE_UPSTREAM_TIMEOUT_SECS".to_string(), e.to_string())
        })?;
        let upstream_retries = get_env_or_default(
            "VITRINE_UPSTREAM_RETRIES",
            &DEFAULT_UPSTREAM_RETRIES.to_string(),
        )
        .parse::<u32>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("VITRINE_UPSTREAM_RETRIES".to_string(), e.to_string())
        })?;
        let data_dir = get_optional_env("VITRINE_DATA_DIR").map(PathBuf::from);
        let default_theme = get_optional_env("VITRINE_DEFAULT_THEME")
            .map(|raw| {
                raw.parse::<Theme>().map_err(|e| {
                    ConfigError::InvalidEnvVar("VITRINE_DEFAULT_THEME".to_string(), e.to_string())
                })
            })
            .transpose()?;

        Ok(Self {
            host,
            port,
            upstream_url,
            upstream_timeout,
            upstream_retries,
            data_dir,
            default_theme,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
