/// Wire types for the two dashboard feeds
///
/// These types match the JSON documents published under `data/` by the
/// report generator: `headlines.json` and `prices.json`.
use serde::{Deserialize, Serialize};

/// Number of rows the gainers and losers tables derive from a flat price list.
pub const MOVERS_LIMIT: usize = 15;

/// Headline feed document (`data/headlines.json`)
///
/// Bucket order is feed-supplied and preserved. Missing buckets are empty.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HeadlineFeed {
    /// ISO 8601 timestamp of when the generator wrote the feed
    pub generated_at: String,
    /// Priority bucket: posts from followed accounts
    #[serde(default)]
    pub x_breaking: Vec<HeadlineItem>,
    /// Published within the last hour
    #[serde(default)]
    pub breaking: Vec<HeadlineItem>,
    /// Published within the last day
    #[serde(default)]
    pub day: Vec<HeadlineItem>,
    /// Published within the last week
    #[serde(default)]
    pub week: Vec<HeadlineItem>,
    /// Published within the last month
    #[serde(default)]
    pub month: Vec<HeadlineItem>,
}

impl HeadlineFeed {
    /// Items of one bucket, in feed order.
    pub fn bucket(&self, bucket: Bucket) -> &[HeadlineItem] {
        match bucket {
            Bucket::XBreaking => &self.x_breaking,
            Bucket::Breaking => &self.breaking,
            Bucket::Day => &self.day,
            Bucket::Week => &self.week,
            Bucket::Month => &self.month,
        }
    }
}

/// A single headline
///
/// No uniqueness is enforced; duplicates are rendered as given.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HeadlineItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    /// Canonical source host (e.g. "coindesk.com")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// ISO 8601 publication timestamp
    #[serde(default)]
    pub published_at: String,
}

/// Named headline bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    XBreaking,
    Breaking,
    Day,
    Week,
    Month,
}

impl Bucket {
    /// All buckets in display order.
    pub const ALL: [Bucket; 5] = [
        Bucket::XBreaking,
        Bucket::Breaking,
        Bucket::Day,
        Bucket::Week,
        Bucket::Month,
    ];

    /// Field name used by the feed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::XBreaking => "x_breaking",
            Bucket::Breaking => "breaking",
            Bucket::Day => "day",
            Bucket::Week => "week",
            Bucket::Month => "month",
        }
    }

    /// Human readable panel title
    pub fn title(&self) -> &'static str {
        match self {
            Bucket::XBreaking => "BREAKING ON X",
            Bucket::Breaking => "BREAKING",
            Bucket::Day => "TODAY",
            Bucket::Week => "THIS WEEK",
            Bucket::Month => "THIS MONTH",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single coin quote
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PriceItem {
    #[serde(default)]
    pub symbol: String,
    /// Spot price in USD
    #[serde(default)]
    pub price: Option<f64>,
    /// 24 hour change in percent
    #[serde(default)]
    pub change24h: Option<f64>,
    /// Market cap rank, starting at 1
    #[serde(default)]
    pub rank: Option<u32>,
    /// Market cap in USD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
}

/// Price feed document (`data/prices.json`), normalised to the split shape.
///
/// The wire document is either a bare array of [`PriceItem`] or an object
/// carrying `prices` plus optional precomputed `gainers` and `losers`. When
/// the movers are absent they are derived from `prices`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "PriceFeedWire")]
pub struct PriceFeed {
    pub prices: Vec<PriceItem>,
    pub gainers: Vec<PriceItem>,
    pub losers: Vec<PriceItem>,
}

impl PriceFeed {
    /// Construct a [`PriceFeed`] from a flat list, deriving the movers.
    pub fn from_prices(prices: Vec<PriceItem>) -> Self {
        let gainers = derive_gainers(&prices);
        let losers = derive_losers(&prices);
        Self {
            prices,
            gainers,
            losers,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceFeedWire {
    Flat(Vec<PriceItem>),
    Split {
        prices: Vec<PriceItem>,
        #[serde(default)]
        gainers: Option<Vec<PriceItem>>,
        #[serde(default)]
        losers: Option<Vec<PriceItem>>,
    },
}

impl From<PriceFeedWire> for PriceFeed {
    fn from(wire: PriceFeedWire) -> Self {
        match wire {
            PriceFeedWire::Flat(prices) => Self::from_prices(prices),
            PriceFeedWire::Split {
                prices,
                gainers,
                losers,
            } => {
                let gainers = gainers.unwrap_or_else(|| derive_gainers(&prices));
                let losers = losers.unwrap_or_else(|| derive_losers(&prices));
                Self {
                    prices,
                    gainers,
                    losers,
                }
            }
        }
    }
}

/// Items with a strictly positive change, best first.
fn derive_gainers(prices: &[PriceItem]) -> Vec<PriceItem> {
    let mut gainers: Vec<PriceItem> = prices
        .iter()
        .filter(|item| item.change24h.is_some_and(|change| change > 0.0))
        .cloned()
        .collect();
    gainers.sort_by(|a, b| b.change24h.unwrap_or(0.0).total_cmp(&a.change24h.unwrap_or(0.0)));
    gainers.truncate(MOVERS_LIMIT);
    gainers
}

/// Items with a strictly negative change, worst first.
fn derive_losers(prices: &[PriceItem]) -> Vec<PriceItem> {
    let mut losers: Vec<PriceItem> = prices
        .iter()
        .filter(|item| item.change24h.is_some_and(|change| change < 0.0))
        .cloned()
        .collect();
    losers.sort_by(|a, b| a.change24h.unwrap_or(0.0).total_cmp(&b.change24h.unwrap_or(0.0)));
    losers.truncate(MOVERS_LIMIT);
    losers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(symbol: &str, change24h: Option<f64>) -> PriceItem {
        PriceItem {
            symbol: symbol.to_string(),
            change24h,
            ..Default::default()
        }
    }

    #[test]
    fn test_headline_feed_missing_buckets_default_empty() {
        let feed: HeadlineFeed = serde_json::from_str(
            r#"{
                "generated_at": "2026-10-16T12:00:00+00:00",
                "breaking": [
                    {"title": "XRP ledger upgrade", "link": "https://xrpl.org/blog/a", "source": "xrpl.org", "published_at": "2026-10-16T11:50:00+00:00", "score": 9}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(feed.breaking.len(), 1);
        assert_eq!(feed.breaking[0].source.as_deref(), Some("xrpl.org"));
        assert!(feed.x_breaking.is_empty());
        assert!(feed.month.is_empty());
        assert_eq!(feed.bucket(Bucket::Breaking)[0].title, "XRP ledger upgrade");
    }

    #[test]
    fn test_headline_feed_requires_generated_at() {
        let result = serde_json::from_str::<HeadlineFeed>(r#"{"breaking": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_headline_item_missing_fields_degrade() {
        let item: HeadlineItem = serde_json::from_str(r#"{"published_at": "bogus"}"#).unwrap();
        assert_eq!(item.title, "");
        assert_eq!(item.link, "");
        assert_eq!(item.source, None);
    }

    #[test]
    fn test_price_feed_flat_derives_movers() {
        let feed: PriceFeed = serde_json::from_str(
            r#"[
                {"rank": 1, "symbol": "btc", "price": 67000.5, "change24h": 1.5, "market_cap": 1300000000000},
                {"rank": 2, "symbol": "eth", "price": 2500.0, "change24h": -2.0},
                {"rank": 3, "symbol": "xrp", "price": 0.52, "change24h": 4.0},
                {"rank": 4, "symbol": "usdt", "price": 1.0, "change24h": null},
                {"rank": 5, "symbol": "sol", "price": null, "change24h": -0.5}
            ]"#,
        )
        .unwrap();

        assert_eq!(feed.prices.len(), 5);
        let gainers: Vec<&str> = feed.gainers.iter().map(|i| i.symbol.as_str()).collect();
        let losers: Vec<&str> = feed.losers.iter().map(|i| i.symbol.as_str()).collect();
        assert_eq!(gainers, vec!["xrp", "btc"]);
        assert_eq!(losers, vec!["eth", "sol"]);
        assert_eq!(feed.prices[0].market_cap, Some(1_300_000_000_000.0));
        assert_eq!(feed.prices[4].price, None);
    }

    #[test]
    fn test_price_feed_split_keeps_precomputed_movers() {
        let feed: PriceFeed = serde_json::from_str(
            r#"{
                "prices": [{"symbol": "btc", "change24h": 1.0}, {"symbol": "eth", "change24h": -1.0}],
                "gainers": [{"symbol": "eth", "change24h": -1.0}],
                "losers": []
            }"#,
        )
        .unwrap();

        assert_eq!(feed.prices.len(), 2);
        assert_eq!(feed.gainers, vec![quote("eth", Some(-1.0))]);
        assert!(feed.losers.is_empty());
    }

    #[test]
    fn test_price_feed_split_without_movers_derives_them() {
        let feed: PriceFeed =
            serde_json::from_str(r#"{"prices": [{"symbol": "btc", "change24h": 1.0}]}"#).unwrap();
        assert_eq!(feed.gainers, vec![quote("btc", Some(1.0))]);
        assert!(feed.losers.is_empty());
    }

    #[test]
    fn test_derived_movers_are_capped() {
        let prices: Vec<PriceItem> = (0..40)
            .map(|i| quote(&format!("c{i}"), Some(i as f64 - 20.0)))
            .collect();
        let feed = PriceFeed::from_prices(prices);

        assert_eq!(feed.gainers.len(), MOVERS_LIMIT);
        assert_eq!(feed.losers.len(), MOVERS_LIMIT);
        assert_eq!(feed.gainers[0].symbol, "c39");
        assert_eq!(feed.losers[0].symbol, "c0");
    }
}
