use crate::constants::DEFAULT_SIGNIN_TIMEOUT_SECS;
use crate::storage::config::StorageConfig;
use crate::utils::config::{get_env_or_default, get_env_path};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Base URL used when `FOODGRAM_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Foodgram API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Token and download persistence
    pub storage: StorageConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the Foodgram backend, without the `/api` prefix
    pub base_url: String,
    /// Transport timeout in seconds applied to every request; 0 disables it
    pub timeout: u64,
    /// Timeout in milliseconds for the whole sign-in exchange
    pub signin_timeout_ms: u64,
}

impl RestApiConfig {
    /// Transport timeout, if one is configured
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }

    /// Sign-in timeout
    #[must_use]
    pub fn signin_timeout(&self) -> Duration {
        Duration::from_millis(self.signin_timeout_ms)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
///
/// Requests are only throttled when `enabled` is set.
pub struct RateLimiterConfig {
    /// Throttles outgoing requests when true
    #[serde(default)]
    pub enabled: bool,
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_requests: 50,
            period_seconds: 10,
            burst_size: 20,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file is loaded first when present. Every variable is
    /// optional; see the crate documentation for the full list.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("FOODGRAM_BASE_URL", String::from(DEFAULT_BASE_URL));
        if base_url == DEFAULT_BASE_URL {
            warn!("FOODGRAM_BASE_URL not set, using {}", DEFAULT_BASE_URL);
        }
        let defaults = RateLimiterConfig::default();

        Config {
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_default("FOODGRAM_REST_TIMEOUT", 0),
                signin_timeout_ms: get_env_or_default(
                    "FOODGRAM_SIGNIN_TIMEOUT_MS",
                    DEFAULT_SIGNIN_TIMEOUT_SECS * 1000,
                ),
            },
            storage: StorageConfig {
                token_path: get_env_path("FOODGRAM_TOKEN_PATH"),
                download_dir: get_env_path("FOODGRAM_DOWNLOAD_DIR")
                    .unwrap_or_else(|| PathBuf::from(".")),
            },
            rate_limiter: RateLimiterConfig {
                enabled: get_env_or_default("FOODGRAM_RATE_LIMIT_ENABLED", defaults.enabled),
                max_requests: get_env_or_default(
                    "FOODGRAM_RATE_LIMIT_MAX_REQUESTS",
                    defaults.max_requests,
                ),
                period_seconds: get_env_or_default(
                    "FOODGRAM_RATE_LIMIT_PERIOD_SECONDS",
                    defaults.period_seconds,
                ),
                burst_size: get_env_or_default("FOODGRAM_RATE_LIMIT_BURST_SIZE", defaults.burst_size),
            },
        }
    }

    /// Creates a configuration for `base_url` with built-in defaults, ignoring the environment
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: 0,
                signin_timeout_ms: DEFAULT_SIGNIN_TIMEOUT_SECS * 1000,
            },
            storage: StorageConfig {
                token_path: None,
                download_dir: PathBuf::from("."),
            },
            rate_limiter: RateLimiterConfig::default(),
        }
    }

    /// Full URL for an API path such as `/api/recipes/`
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
