/// Dashboard configuration
///
/// Everything is read from `REPORT_*` environment variables with defaults,
/// the same way the trading terminals read `WS_URL` and `TICKERS`.
use std::{path::PathBuf, time::Duration};

use report_data::{config::FeedConfig, view::ticker::DEFAULT_SPEED};
use tracing::warn;

use crate::screen::RegionId;

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Feed client settings
    pub feed: FeedConfig,
    /// Interval between timer-driven refresh cycles
    pub refresh_interval: Duration,
    /// Ticker scroll speed in cells per second
    pub ticker_speed: f64,
    /// Regions mounted on the screen
    pub regions: Vec<RegionId>,
    /// Destination of the tracing output
    pub log_file: PathBuf,
    /// Redraw interval driving the ticker animation
    pub frame_interval: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            refresh_interval: Duration::from_secs(120),
            ticker_speed: DEFAULT_SPEED,
            regions: RegionId::ALL.to_vec(),
            log_file: PathBuf::from("report-dashboard.log"),
            frame_interval: Duration::from_millis(100),
        }
    }
}

impl DashboardConfig {
    /// Build a configuration from the environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            feed: FeedConfig::from_env(),
            refresh_interval: parse_env::<u64>("REPORT_REFRESH_SECS")
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.refresh_interval),
            ticker_speed: parse_env::<f64>("REPORT_TICKER_SPEED")
                .filter(|speed| speed.is_finite() && *speed > 0.0)
                .unwrap_or(defaults.ticker_speed),
            regions: std::env::var("REPORT_REGIONS")
                .map(|raw| parse_regions(&raw))
                .unwrap_or(defaults.regions),
            log_file: std::env::var("REPORT_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
            frame_interval: defaults.frame_interval,
        }
    }

    /// Set feed client settings
    pub fn with_feed(mut self, feed: FeedConfig) -> Self {
        self.feed = feed;
        self
    }

    /// Set refresh interval
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Set ticker speed
    pub fn with_ticker_speed(mut self, speed: f64) -> Self {
        self.ticker_speed = speed;
        self
    }

    /// Set mounted regions
    pub fn with_regions(mut self, regions: impl IntoIterator<Item = RegionId>) -> Self {
        self.regions = regions.into_iter().collect();
        self
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|raw| raw.trim().parse().ok())
}

/// Parse a comma separated region list, skipping unknown names.
pub fn parse_regions(raw: &str) -> Vec<RegionId> {
    let mut regions = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        match name.parse::<RegionId>() {
            Ok(region) if !regions.contains(&region) => regions.push(region),
            Ok(_) => {}
            Err(_) => warn!(region = name, "ignoring unknown region"),
        }
    }
    regions
}
