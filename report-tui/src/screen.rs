/// Region screen: the mutable surface every view is applied to
///
/// Each dashboard area is a named, optionally mounted region. Applying a view
/// checks whether a region is mounted and silently skips it otherwise, so a
/// reduced layout never turns into an error.
use std::collections::HashMap;

use ratatui::text::Span;
use report_data::{
    Bucket, PriceItem,
    view::{DashboardView, HeadlineRow, MarketRow, Sentiment, TickerTrack, setup_ticker},
};
use tracing::debug;

/// Named screen region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    Year,
    XBreaking,
    Breaking,
    Day,
    Week,
    Month,
    Ticker,
    GainersBody,
    LosersBody,
    SentimentIndicator,
    LastUpdated,
}

impl RegionId {
    pub const ALL: [RegionId; 11] = [
        RegionId::Year,
        RegionId::XBreaking,
        RegionId::Breaking,
        RegionId::Day,
        RegionId::Week,
        RegionId::Month,
        RegionId::Ticker,
        RegionId::GainersBody,
        RegionId::LosersBody,
        RegionId::SentimentIndicator,
        RegionId::LastUpdated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionId::Year => "year",
            RegionId::XBreaking => "x_breaking",
            RegionId::Breaking => "breaking",
            RegionId::Day => "day",
            RegionId::Week => "week",
            RegionId::Month => "month",
            RegionId::Ticker => "ticker",
            RegionId::GainersBody => "gainers-body",
            RegionId::LosersBody => "losers-body",
            RegionId::SentimentIndicator => "sentiment-indicator",
            RegionId::LastUpdated => "lastUpdated",
        }
    }

    /// Region showing the rows of `bucket`
    pub fn for_bucket(bucket: Bucket) -> Self {
        match bucket {
            Bucket::XBreaking => RegionId::XBreaking,
            Bucket::Breaking => RegionId::Breaking,
            Bucket::Day => RegionId::Day,
            Bucket::Week => RegionId::Week,
            Bucket::Month => RegionId::Month,
        }
    }

    fn empty_region(&self) -> Region {
        match self {
            RegionId::Year | RegionId::LastUpdated => Region::Text(String::new()),
            RegionId::XBreaking
            | RegionId::Breaking
            | RegionId::Day
            | RegionId::Week
            | RegionId::Month => Region::Headlines(HeadlineList::default()),
            RegionId::Ticker => Region::Ticker(TickerState::default()),
            RegionId::GainersBody | RegionId::LosersBody => Region::Table(Vec::new()),
            RegionId::SentimentIndicator => Region::Sentiment(None),
        }
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RegionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegionId::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| format!("unknown region: {s}"))
    }
}

/// Headline rows plus the cursor used for link preview
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlineList {
    pub rows: Vec<HeadlineRow>,
    pub selected: usize,
}

impl HeadlineList {
    pub fn selected_row(&self) -> Option<&HeadlineRow> {
        self.rows.get(self.selected)
    }
}

/// Ticker source prices and the track sized for the current container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickerState {
    pub prices: Vec<PriceItem>,
    pub track: Option<TickerTrack>,
}

/// Content of one mounted region
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    Text(String),
    Headlines(HeadlineList),
    Ticker(TickerState),
    Table(Vec<MarketRow>),
    Sentiment(Option<Sentiment>),
}

/// Rendered width of `text` in terminal cells
pub fn cell_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// All mounted regions and their current content
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    regions: HashMap<RegionId, Region>,
    ticker_speed: f64,
    /// Last measured inner width of the ticker, 0 until the first frame
    ticker_width: usize,
}

impl Screen {
    pub fn new(mounted: &[RegionId], ticker_speed: f64) -> Self {
        Self {
            regions: mounted
                .iter()
                .map(|region| (*region, region.empty_region()))
                .collect(),
            ticker_speed,
            ticker_width: 0,
        }
    }

    pub fn is_mounted(&self, region: RegionId) -> bool {
        self.regions.contains_key(&region)
    }

    pub fn region(&self, region: RegionId) -> Option<&Region> {
        self.regions.get(&region)
    }

    /// Mutable access to a mounted region; `None` means "skip silently".
    pub fn region_mut(&mut self, region: RegionId) -> Option<&mut Region> {
        let found = self.regions.get_mut(&region);
        if found.is_none() {
            debug!(%region, "region not mounted, skipping");
        }
        found
    }

    /// Apply a freshly built view to every mounted region.
    pub fn apply(&mut self, view: &DashboardView) {
        self.set_text(RegionId::Year, &view.year);
        self.set_text(RegionId::LastUpdated, &view.last_updated);

        for (bucket, rows) in &view.headlines {
            if let Some(Region::Headlines(list)) = self.region_mut(RegionId::for_bucket(*bucket)) {
                list.rows = rows.clone();
                list.selected = list.selected.min(list.rows.len().saturating_sub(1));
            }
        }

        self.set_ticker_prices(view.ticker_prices.clone());

        if let Some(Region::Table(rows)) = self.region_mut(RegionId::GainersBody) {
            *rows = view.market.gainers.clone();
        }
        if let Some(Region::Table(rows)) = self.region_mut(RegionId::LosersBody) {
            *rows = view.market.losers.clone();
        }
        if let Some(Region::Sentiment(sentiment)) = self.region_mut(RegionId::SentimentIndicator) {
            *sentiment = view.market.sentiment;
        }
    }

    fn set_text(&mut self, region: RegionId, value: &str) {
        if let Some(Region::Text(text)) = self.region_mut(region) {
            *text = value.to_string();
        }
    }

    /// Replace the ticker prices and rebuild the track for the last known width.
    /// An empty price list leaves the current ticker untouched.
    pub fn set_ticker_prices(&mut self, prices: Vec<PriceItem>) {
        if prices.is_empty() {
            debug!("no ticker prices, keeping current ticker");
            return;
        }
        let (width, speed) = (self.ticker_width, self.ticker_speed);
        if let Some(Region::Ticker(state)) = self.region_mut(RegionId::Ticker) {
            state.track = setup_ticker(&prices, width, speed, cell_width);
            state.prices = prices;
        }
    }

    /// Resize the ticker to `width` cells, rebuilding the track only when the
    /// width it was sized against differs. Returns whether a rebuild happened.
    pub fn fit_ticker(&mut self, width: usize) -> bool {
        if width == 0 || width == self.ticker_width {
            return false;
        }
        self.ticker_width = width;

        let speed = self.ticker_speed;
        match self.regions.get_mut(&RegionId::Ticker) {
            Some(Region::Ticker(state)) => {
                let stale = state
                    .track
                    .as_ref()
                    .is_none_or(|track| track.needs_resize(width));
                if stale {
                    state.track = setup_ticker(&state.prices, width, speed, cell_width);
                }
                stale && state.track.is_some()
            }
            _ => false,
        }
    }

    pub fn text(&self, region: RegionId) -> Option<&str> {
        match self.region(region) {
            Some(Region::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn headlines(&self, bucket: Bucket) -> Option<&HeadlineList> {
        match self.region(RegionId::for_bucket(bucket)) {
            Some(Region::Headlines(list)) => Some(list),
            _ => None,
        }
    }

    pub fn ticker(&self) -> Option<&TickerState> {
        match self.region(RegionId::Ticker) {
            Some(Region::Ticker(state)) => Some(state),
            _ => None,
        }
    }

    pub fn table(&self, region: RegionId) -> Option<&[MarketRow]> {
        match self.region(region) {
            Some(Region::Table(rows)) => Some(rows.as_slice()),
            _ => None,
        }
    }

    /// `None` when the region is unmounted, `Some(None)` before any data.
    pub fn sentiment(&self) -> Option<Option<Sentiment>> {
        match self.region(RegionId::SentimentIndicator) {
            Some(Region::Sentiment(sentiment)) => Some(*sentiment),
            _ => None,
        }
    }

    /// Mounted headline buckets in display order.
    pub fn mounted_buckets(&self) -> Vec<Bucket> {
        Bucket::ALL
            .into_iter()
            .filter(|bucket| self.is_mounted(RegionId::for_bucket(*bucket)))
            .collect()
    }

    /// Move the cursor of `bucket` by `delta` rows, clamped to the list.
    pub fn move_selection(&mut self, bucket: Bucket, delta: isize) {
        if let Some(Region::Headlines(list)) = self.region_mut(RegionId::for_bucket(bucket)) {
            let last = list.rows.len().saturating_sub(1);
            list.selected = list.selected.saturating_add_signed(delta).min(last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use report_data::{FeedSnapshot, HeadlineFeed, HeadlineItem, PriceFeed};

    fn snapshot(titles: &[&str], changes: &[f64]) -> FeedSnapshot {
        FeedSnapshot {
            headlines: HeadlineFeed {
                generated_at: "2026-10-16T12:00:00+00:00".to_string(),
                x_breaking: vec![],
                breaking: titles
                    .iter()
                    .map(|title| HeadlineItem {
                        title: title.to_string(),
                        link: format!("https://example.com/{title}"),
                        source: None,
                        published_at: "2026-10-16T11:00:00+00:00".to_string(),
                    })
                    .collect(),
                day: vec![],
                week: vec![],
                month: vec![],
            },
            prices: PriceFeed::from_prices(
                changes
                    .iter()
                    .enumerate()
                    .map(|(index, change)| PriceItem {
                        symbol: format!("c{index}"),
                        price: Some(1.0),
                        change24h: Some(*change),
                        rank: Some(index as u32 + 1),
                        market_cap: None,
                    })
                    .collect(),
            ),
        }
    }

    fn view(titles: &[&str], changes: &[f64]) -> DashboardView {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        DashboardView::build(&snapshot(titles, changes), now)
    }

    #[test]
    fn test_region_id_round_trips_names() {
        for region in RegionId::ALL {
            assert_eq!(region.as_str().parse::<RegionId>(), Ok(region));
        }
        assert!("market-body".parse::<RegionId>().is_err());
    }

    #[test]
    fn test_apply_fills_every_mounted_region() {
        let mut screen = Screen::new(&RegionId::ALL, 100.0);
        screen.apply(&view(&["a", "b"], &[1.0, 3.0, -2.0]));

        assert_eq!(screen.headlines(Bucket::Breaking).unwrap().rows.len(), 2);
        assert!(screen.headlines(Bucket::Day).unwrap().rows.is_empty());
        assert_eq!(screen.table(RegionId::GainersBody).unwrap().len(), 2);
        assert_eq!(screen.table(RegionId::LosersBody).unwrap().len(), 1);
        assert!(screen.sentiment().unwrap().unwrap().is_bullish());
        assert!(!screen.text(RegionId::LastUpdated).unwrap().is_empty());
        assert_eq!(screen.text(RegionId::Year).unwrap().len(), 4);

        let ticker = screen.ticker().unwrap();
        assert_eq!(ticker.prices.len(), 3);
        // unmeasured container falls back to the default width
        assert_eq!(ticker.track.as_ref().unwrap().container_width, 800);
    }

    #[test]
    fn test_apply_skips_unmounted_regions() {
        let mut screen = Screen::new(&[RegionId::Ticker, RegionId::Breaking], 100.0);
        screen.apply(&view(&["a"], &[1.0]));

        assert!(screen.headlines(Bucket::Breaking).is_some());
        assert!(screen.headlines(Bucket::Day).is_none());
        assert!(screen.table(RegionId::GainersBody).is_none());
        assert!(screen.sentiment().is_none());
        assert!(screen.text(RegionId::LastUpdated).is_none());
        assert_eq!(screen.mounted_buckets(), vec![Bucket::Breaking]);
    }

    #[test]
    fn test_apply_with_no_regions_is_noop() {
        let mut screen = Screen::new(&[], 100.0);
        screen.apply(&view(&["a"], &[1.0]));
        screen.move_selection(Bucket::Breaking, 1);
        assert!(!screen.fit_ticker(120));
        assert!(screen.ticker().is_none());
    }

    #[test]
    fn test_fit_ticker_rebuilds_only_on_width_change() {
        let mut screen = Screen::new(&[RegionId::Ticker], 100.0);
        screen.apply(&view(&[], &[1.0, 2.0]));

        assert!(screen.fit_ticker(120));
        let track = screen.ticker().unwrap().track.clone().unwrap();
        assert_eq!(track.container_width, 120);
        assert!(track.total_width >= 240);

        assert!(!screen.fit_ticker(120));
        assert!(!screen.fit_ticker(0));
        assert!(screen.fit_ticker(60));
        assert_eq!(screen.ticker().unwrap().track.as_ref().unwrap().container_width, 60);
    }

    #[test]
    fn test_ticker_built_at_known_width_after_first_frame() {
        let mut screen = Screen::new(&[RegionId::Ticker], 100.0);
        assert!(!screen.fit_ticker(90));
        screen.apply(&view(&[], &[1.0]));
        assert_eq!(screen.ticker().unwrap().track.as_ref().unwrap().container_width, 90);
    }

    #[test]
    fn test_empty_prices_keep_ticker() {
        let mut screen = Screen::new(&[RegionId::Ticker], 100.0);
        screen.apply(&view(&[], &[1.0]));
        let before = screen.ticker().unwrap().clone();
        assert!(before.track.is_some());

        screen.apply(&view(&[], &[]));
        assert_eq!(screen.ticker().unwrap(), &before);

        // still resizable from the kept prices
        assert!(screen.fit_ticker(70));
        assert_eq!(screen.ticker().unwrap().track.as_ref().unwrap().container_width, 70);
    }

    #[test]
    fn test_move_selection_clamps() {
        let mut screen = Screen::new(&[RegionId::Breaking], 100.0);
        screen.apply(&view(&["a", "b", "c"], &[]));

        screen.move_selection(Bucket::Breaking, 5);
        assert_eq!(screen.headlines(Bucket::Breaking).unwrap().selected, 2);
        screen.move_selection(Bucket::Breaking, -1);
        assert_eq!(
            screen.headlines(Bucket::Breaking).unwrap().selected_row().unwrap().title,
            "b"
        );
        screen.move_selection(Bucket::Breaking, -10);
        assert_eq!(screen.headlines(Bucket::Breaking).unwrap().selected, 0);

        // a shorter refresh pulls the cursor back inside the list
        screen.move_selection(Bucket::Breaking, 2);
        screen.apply(&view(&["z"], &[]));
        assert_eq!(screen.headlines(Bucket::Breaking).unwrap().selected, 0);
    }
}
