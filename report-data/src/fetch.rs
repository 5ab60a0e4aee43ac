/// HTTP client for the headline and price feeds
///
/// Every request carries a `v` query parameter that strictly increases, so
/// intermediate caches never serve a stale document.
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::{
    config::FeedConfig,
    error::FeedError,
    model::{HeadlineFeed, PriceFeed},
};

/// Query parameter carrying the cache-busting token
pub const CACHE_BUSTER_PARAM: &str = "v";

/// Both feeds as fetched within one refresh cycle
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSnapshot {
    pub headlines: HeadlineFeed,
    pub prices: PriceFeed,
}

/// Generates strictly increasing millisecond tokens, even when the clock
/// stalls or steps backwards.
#[derive(Debug, Default)]
pub struct CacheBuster {
    last: AtomicI64,
}

impl CacheBuster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next token: the current Unix time in milliseconds, or one past the
    /// previous token if that is larger.
    pub fn next_token(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Feed client
#[derive(Debug)]
pub struct FeedClient {
    config: FeedConfig,
    base: Url,
    http: reqwest::Client,
    cache_buster: CacheBuster,
}

impl FeedClient {
    /// Create a new client, validating the configured base URL.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let base = config.base()?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            config,
            base,
            http,
            cache_buster: CacheBuster::new(),
        })
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Resolve `path` against the base URL and append a fresh cache-buster.
    pub fn url_for(&self, path: &str) -> Result<Url, FeedError> {
        let mut url = self.base.join(path.trim_start_matches('/'))?;
        url.query_pairs_mut().append_pair(
            CACHE_BUSTER_PARAM,
            &self.cache_buster.next_token().to_string(),
        );
        Ok(url)
    }

    /// GET `path` and decode the body as JSON.
    ///
    /// Any non-success status, transport failure or malformed body is an error.
    pub async fn load_json<T>(&self, path: &str) -> Result<T, FeedError>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(path)?;
        debug!(%url, "requesting feed");

        let response = self.http.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|error| FeedError::Parse {
            url: url.to_string(),
            reason: error.to_string(),
        })
    }

    pub async fn fetch_headlines(&self) -> Result<HeadlineFeed, FeedError> {
        self.load_json(&self.config.headlines_path).await
    }

    pub async fn fetch_prices(&self) -> Result<PriceFeed, FeedError> {
        self.load_json(&self.config.prices_path).await
    }

    /// Fetch both feeds concurrently. Fails as a whole if either fails;
    /// partial results are never returned.
    pub async fn fetch_snapshot(&self) -> Result<FeedSnapshot, FeedError> {
        let (headlines, prices) = tokio::try_join!(self.fetch_headlines(), self.fetch_prices())?;
        Ok(FeedSnapshot { headlines, prices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_buster_strictly_increases() {
        let buster = CacheBuster::new();
        let mut prev = buster.next_token();
        for _ in 0..1000 {
            let next = buster.next_token();
            assert!(next > prev, "{next} should be greater than {prev}");
            prev = next;
        }
    }

    #[test]
    fn test_url_for_appends_cache_buster() {
        let client = FeedClient::new(FeedConfig::new("http://localhost:8080/site")).unwrap();

        let first = client.url_for("data/prices.json").unwrap();
        let second = client.url_for("/data/prices.json").unwrap();

        assert_eq!(first.path(), "/site/data/prices.json");
        assert_eq!(second.path(), "/site/data/prices.json");

        let token = |url: &Url| -> i64 {
            url.query_pairs()
                .find(|(key, _)| key == CACHE_BUSTER_PARAM)
                .and_then(|(_, value)| value.parse().ok())
                .unwrap()
        };
        assert!(token(&second) > token(&first));
    }

    #[test]
    fn test_new_rejects_invalid_base() {
        let result = FeedClient::new(FeedConfig::new("::"));
        assert!(matches!(result, Err(FeedError::InvalidUrl(_))));
    }
}
