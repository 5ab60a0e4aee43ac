//! Ratatui widgets for every dashboard region
//!
//! Widgets only read the [`Screen`]; unmounted regions get no area at all.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
};
use report_data::Bucket;

use crate::{
    refresh::RefreshState,
    screen::{RegionId, Screen},
};

mod headlines;
mod market;
mod status;
mod ticker;

pub use headlines::render_headlines_panel;
pub use market::{render_movers_table, render_sentiment_panel};
pub use status::{render_detail_line, render_status_bar};
pub use ticker::render_ticker_panel;

// Palette shared with the trading terminals
pub(crate) const C_BUY: Color = Color::Rgb(100, 220, 100);
pub(crate) const C_SELL: Color = Color::Rgb(220, 100, 100);
pub(crate) const C_NEUTRAL: Color = Color::Rgb(180, 180, 100);
pub(crate) const C_DIM: Color = Color::Rgb(120, 120, 120);
pub(crate) const C_BRIGHT: Color = Color::Rgb(220, 220, 220);
pub(crate) const C_ACCENT: Color = Color::Rgb(100, 180, 220);

/// Per-frame state that is not part of the screen content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Headline bucket receiving cursor keys
    pub focus: Option<Bucket>,
    /// Time since the ticker animation started
    pub ticker_elapsed: Duration,
    pub refresh: RefreshState,
}

/// Areas assigned to the mounted regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    pub ticker: Option<Rect>,
    pub headlines: Vec<(Bucket, Rect)>,
    pub sentiment: Option<Rect>,
    pub gainers: Option<Rect>,
    pub losers: Option<Rect>,
    pub detail: Rect,
    pub status: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect, screen: &Screen) -> Self {
        let has_ticker = screen.is_mounted(RegionId::Ticker);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(if has_ticker { 3 } else { 0 }),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let buckets = screen.mounted_buckets();
        let market_regions: Vec<RegionId> = [
            RegionId::SentimentIndicator,
            RegionId::GainersBody,
            RegionId::LosersBody,
        ]
        .into_iter()
        .filter(|region| screen.is_mounted(*region))
        .collect();

        let (left_pct, right_pct) = match (buckets.is_empty(), market_regions.is_empty()) {
            (false, false) => (60, 40),
            (false, true) => (100, 0),
            (true, false) => (0, 100),
            (true, true) => (0, 0),
        };
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(left_pct),
                Constraint::Percentage(right_pct),
            ])
            .split(rows[1]);

        let headlines = if buckets.is_empty() {
            Vec::new()
        } else {
            let n = buckets.len() as u32;
            let areas = Layout::default()
                .direction(Direction::Vertical)
                .constraints(buckets.iter().map(|_| Constraint::Ratio(1, n)))
                .split(columns[0]);
            buckets.into_iter().zip(areas.iter().copied()).collect()
        };

        let has_sentiment = market_regions.contains(&RegionId::SentimentIndicator);
        let tables: Vec<RegionId> = market_regions
            .into_iter()
            .filter(|region| *region != RegionId::SentimentIndicator)
            .collect();
        let market = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(if has_sentiment { 3 } else { 0 }),
                Constraint::Min(0),
            ])
            .split(columns[1]);
        let table_areas = if tables.is_empty() {
            Vec::new()
        } else {
            let n = tables.len() as u32;
            Layout::default()
                .direction(Direction::Vertical)
                .constraints(tables.iter().map(|_| Constraint::Ratio(1, n)))
                .split(market[1])
                .to_vec()
        };
        let table_area = |region: RegionId| {
            tables
                .iter()
                .position(|candidate| *candidate == region)
                .map(|index| table_areas[index])
        };

        Self {
            ticker: has_ticker.then_some(rows[0]),
            sentiment: has_sentiment.then_some(market[0]),
            gainers: table_area(RegionId::GainersBody),
            losers: table_area(RegionId::LosersBody),
            headlines,
            detail: rows[2],
            status: rows[3],
        }
    }

    /// Inner width of the ticker panel, 0 when the ticker is unmounted.
    pub fn ticker_width(&self) -> usize {
        self.ticker
            .map(|area| area.width.saturating_sub(2) as usize)
            .unwrap_or(0)
    }
}

/// Draw the whole dashboard.
pub fn render_dashboard(f: &mut Frame, screen: &Screen, ctx: &FrameContext) {
    let layout = DashboardLayout::new(f.area(), screen);

    if let (Some(area), Some(state)) = (layout.ticker, screen.ticker()) {
        render_ticker_panel(f, area, state, ctx.ticker_elapsed);
    }

    for (bucket, area) in &layout.headlines {
        if let Some(list) = screen.headlines(*bucket) {
            render_headlines_panel(f, *area, *bucket, list, ctx.focus == Some(*bucket));
        }
    }

    if let (Some(area), Some(sentiment)) = (layout.sentiment, screen.sentiment()) {
        render_sentiment_panel(f, area, sentiment);
    }
    if let (Some(area), Some(rows)) = (layout.gainers, screen.table(RegionId::GainersBody)) {
        render_movers_table(f, area, " TOP GAINERS (24H) ", rows);
    }
    if let (Some(area), Some(rows)) = (layout.losers, screen.table(RegionId::LosersBody)) {
        render_movers_table(f, area, " TOP LOSERS (24H) ", rows);
    }

    let selected = ctx
        .focus
        .and_then(|bucket| screen.headlines(bucket))
        .and_then(|list| list.selected_row());
    render_detail_line(f, layout.detail, selected);
    render_status_bar(f, layout.status, screen, ctx.refresh);
}
