use crate::{
    format::{PLACEHOLDER, fmt_change, fmt_market_cap, fmt_price},
    model::{PriceFeed, PriceItem},
};

/// Rows rendered per movers table
pub const MAX_MOVER_ROWS: usize = 15;

/// Colour class of a row's change cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
}

/// One rendered market table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketRow {
    pub rank: String,
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub market_cap: String,
    pub tone: Tone,
}

/// Aggregate market direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    /// Arithmetic mean of `change24h` across every price, missing as zero
    pub average_change: f64,
}

impl Sentiment {
    /// Compute sentiment over `prices`, or `None` for an empty list.
    pub fn from_prices(prices: &[PriceItem]) -> Option<Self> {
        if prices.is_empty() {
            return None;
        }

        let sum: f64 = prices.iter().map(|item| item.change24h.unwrap_or(0.0)).sum();
        Some(Self {
            average_change: sum / prices.len() as f64,
        })
    }

    pub fn is_bullish(&self) -> bool {
        self.average_change > 0.0
    }

    /// `Bullish (Avg 24h Change: 2.00%)` / `Bearish (Avg 24h Change: -0.25%)`
    pub fn label(&self) -> String {
        let direction = if self.is_bullish() { "Bullish" } else { "Bearish" };
        format!("{direction} (Avg 24h Change: {:.2}%)", self.average_change)
    }
}

/// Gainers and losers tables plus sentiment
#[derive(Debug, Clone, PartialEq)]
pub struct MarketView {
    pub gainers: Vec<MarketRow>,
    pub losers: Vec<MarketRow>,
    pub sentiment: Option<Sentiment>,
}

/// Project a price feed into the movers tables.
///
/// Gainers are always [`Tone::Positive`] and losers always
/// [`Tone::Negative`], whatever the sign of their change.
pub fn render_market(feed: &PriceFeed) -> MarketView {
    MarketView {
        gainers: render_rows(&feed.gainers, Tone::Positive),
        losers: render_rows(&feed.losers, Tone::Negative),
        sentiment: Sentiment::from_prices(&feed.prices),
    }
}

fn render_rows(items: &[PriceItem], tone: Tone) -> Vec<MarketRow> {
    items
        .iter()
        .take(MAX_MOVER_ROWS)
        .map(|item| MarketRow {
            rank: item
                .rank
                .map(|rank| rank.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            symbol: item.symbol.to_uppercase(),
            price: item
                .price
                .map(|price| format!("${}", fmt_price(price)))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            change: fmt_change(item.change24h),
            market_cap: fmt_market_cap(item.market_cap),
            tone,
        })
        .collect()
}
