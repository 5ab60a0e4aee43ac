//! Pure view-models for every dashboard region
//!
//! Building a [`DashboardView`] never touches the terminal; applying it is the
//! caller's job. This keeps every projection testable without a renderer.

use chrono::{DateTime, Datelike, Local, Utc};

use crate::{
    fetch::FeedSnapshot,
    model::{Bucket, PriceItem},
    time::fmt_last_updated,
};

pub mod headlines;
pub mod market;
pub mod ticker;

pub use headlines::{HeadlineRow, render_list};
pub use market::{MarketRow, MarketView, Sentiment, Tone, render_market};
pub use ticker::{TickerRun, TickerTrack, setup_ticker};

/// Everything one refresh cycle renders
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Copyright year for the footer
    pub year: String,
    /// Rendered rows per headline bucket, in [`Bucket::ALL`] order
    pub headlines: Vec<(Bucket, Vec<HeadlineRow>)>,
    /// Ticker source; the track itself is sized once the container is known
    pub ticker_prices: Vec<PriceItem>,
    pub market: MarketView,
    /// Absolute label derived from the feed's `generated_at`
    pub last_updated: String,
}

impl DashboardView {
    /// Build the view for `snapshot` as seen at `now`.
    pub fn build(snapshot: &FeedSnapshot, now: DateTime<Utc>) -> Self {
        let headlines = Bucket::ALL
            .iter()
            .map(|bucket| (*bucket, render_list(snapshot.headlines.bucket(*bucket), now)))
            .collect();

        Self {
            year: now.with_timezone(&Local).year().to_string(),
            headlines,
            ticker_prices: snapshot.prices.prices.clone(),
            market: render_market(&snapshot.prices),
            last_updated: fmt_last_updated(&snapshot.headlines.generated_at),
        }
    }

    /// Rows of one bucket.
    pub fn bucket(&self, bucket: Bucket) -> &[HeadlineRow] {
        self.headlines
            .iter()
            .find(|(candidate, _)| *candidate == bucket)
            .map(|(_, rows)| rows.as_slice())
            .unwrap_or_default()
    }
}
