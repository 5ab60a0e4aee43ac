/// Feed client configuration
///
/// Defaults match the layout the report generator publishes: both documents
/// live under `data/` next to the dashboard.
use std::time::Duration;

use url::Url;

use crate::error::FeedError;

/// Default origin serving the `data/` directory
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/";

/// Feed client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    /// Origin the feed paths are resolved against
    pub base_url: String,
    /// Path of the headline feed, relative to `base_url`
    pub headlines_path: String,
    /// Path of the price feed, relative to `base_url`
    pub prices_path: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headlines_path: "data/headlines.json".to_string(),
            prices_path: "data/prices.json".to_string(),
            request_timeout: Duration::from_secs(20),
            user_agent: concat!("BlairReportDashboard/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FeedConfig {
    /// Create a new configuration with a custom base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Build a configuration from `REPORT_*` environment variables, falling
    /// back to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env_or("REPORT_BASE_URL", defaults.base_url),
            headlines_path: env_or("REPORT_HEADLINES_PATH", defaults.headlines_path),
            prices_path: env_or("REPORT_PRICES_PATH", defaults.prices_path),
            request_timeout: std::env::var("REPORT_TIMEOUT_SECS")
                .ok()
                .and_then(|secs| secs.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            user_agent: defaults.user_agent,
        }
    }

    /// Set headline feed path
    pub fn with_headlines_path(mut self, path: impl Into<String>) -> Self {
        self.headlines_path = path.into();
        self
    }

    /// Set price feed path
    pub fn with_prices_path(mut self, path: impl Into<String>) -> Self {
        self.prices_path = path.into();
        self
    }

    /// Set request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Parse `base_url`, ensuring a trailing slash so relative paths join
    /// beneath it rather than replacing its last segment.
    pub fn base(&self) -> Result<Url, FeedError> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Ok(Url::parse(&raw)?)
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(default)
}
