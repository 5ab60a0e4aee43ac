//! # Report-Data
//! Feed client and view-models for The Blair Report dashboard.
//!
//! Two JSON documents drive the dashboard: `data/headlines.json` (news
//! buckets) and `data/prices.json` (coin quotes). This crate fetches both
//! with a cache-busting query parameter and projects them into pure
//! view-models:
//! * headline lists with relative ages
//! * a self-measuring, seamlessly looping price ticker
//! * gainers/losers tables with an aggregate market sentiment
//!
//! ```rust,no_run
//! use report_data::{config::FeedConfig, fetch::FeedClient, view::DashboardView};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FeedClient::new(FeedConfig::from_env())?;
//!     let snapshot = client.fetch_snapshot().await?;
//!     let view = DashboardView::build(&snapshot, chrono::Utc::now());
//!     println!("{} gainers", view.market.gainers.len());
//!     Ok(())
//! }
//! ```

/// Feed client configuration.
pub mod config;

/// All [`Error`](std::error::Error)s generated in Report-Data.
pub mod error;

/// Cache-busted HTTP loading of both feeds.
pub mod fetch;

/// Number formatting.
pub mod format;

/// Wire types for the headline and price feeds.
pub mod model;

/// Relative and absolute timestamp labels.
pub mod time;

/// Pure view-models for every dashboard region.
pub mod view;

pub use fetch::{FeedClient, FeedSnapshot};
pub use model::{Bucket, HeadlineFeed, HeadlineItem, PriceFeed, PriceItem};

