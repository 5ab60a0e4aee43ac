use httpmock::{Method::GET, MockServer};
use report_data::{
    Bucket, FeedClient,
    config::FeedConfig,
    error::FeedError,
    fetch::CACHE_BUSTER_PARAM,
};

const HEADLINES: &str = r#"{
    "x_breaking": [],
    "breaking": [
        {"title": "Ripple expands ODL corridors", "link": "https://ripple.com/insights/a", "published_at": "2026-10-16T11:40:00+00:00", "source": "ripple.com", "score": 8}
    ],
    "day": [
        {"title": "DTCC tokenization pilot", "link": "https://dtcc.com/b", "published_at": "2026-10-16T02:00:00+00:00", "source": "dtcc.com", "score": 6},
        {"title": "Stellar anchors go live", "link": "https://stellar.org/c", "published_at": "2026-10-15T20:00:00+00:00"}
    ],
    "week": [],
    "month": [],
    "generated_at": "2026-10-16T12:00:00+00:00"
}"#;

const PRICES_FLAT: &str = r#"[
    {"rank": 1, "symbol": "btc", "price": 67000.5, "change24h": 1.0, "market_cap": 1300000000000},
    {"rank": 2, "symbol": "eth", "price": 2500.25, "change24h": -0.5, "market_cap": 300000000000},
    {"rank": 3, "symbol": "xrp", "price": 0.5234, "change24h": 3.0, "market_cap": 29000000000}
]"#;

fn client(server: &MockServer) -> FeedClient {
    FeedClient::new(FeedConfig::new(server.base_url())).unwrap()
}

#[tokio::test]
async fn fetch_snapshot_loads_both_feeds_with_cache_buster() {
    let server = MockServer::start();

    let headlines_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/data/headlines.json")
            .query_param_exists(CACHE_BUSTER_PARAM);
        then.status(200)
            .header("content-type", "application/json")
            .body(HEADLINES);
    });
    let prices_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/data/prices.json")
            .query_param_exists(CACHE_BUSTER_PARAM);
        then.status(200)
            .header("content-type", "application/json")
            .body(PRICES_FLAT);
    });

    let snapshot = client(&server).fetch_snapshot().await.unwrap();

    headlines_mock.assert();
    prices_mock.assert();

    assert_eq!(snapshot.headlines.generated_at, "2026-10-16T12:00:00+00:00");
    assert_eq!(snapshot.headlines.bucket(Bucket::Day).len(), 2);
    assert_eq!(snapshot.headlines.day[1].source, None);
    assert_eq!(snapshot.prices.prices.len(), 3);
    assert_eq!(snapshot.prices.gainers[0].symbol, "xrp");
    assert_eq!(snapshot.prices.losers[0].symbol, "eth");
}

#[tokio::test]
async fn fetch_prices_accepts_split_shape() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/data/prices.json");
        then.status(200).body(
            r#"{
                "prices": [{"symbol": "btc", "change24h": 1.0}, {"symbol": "eth", "change24h": -1.0}],
                "gainers": [{"symbol": "btc", "change24h": 1.0}],
                "losers": [{"symbol": "eth", "change24h": -1.0}]
            }"#,
        );
    });

    let prices = client(&server).fetch_prices().await.unwrap();

    assert_eq!(prices.prices.len(), 2);
    assert_eq!(prices.gainers.len(), 1);
    assert_eq!(prices.losers.len(), 1);
}

#[tokio::test]
async fn non_success_status_is_network_failure() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/data/headlines.json");
        then.status(503);
    });

    let error = client(&server).fetch_headlines().await.unwrap_err();

    assert!(matches!(error, FeedError::Status { status, .. } if status.as_u16() == 503));
    assert!(error.is_network());
}

#[tokio::test]
async fn malformed_json_is_parse_failure() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/data/prices.json");
        then.status(200).body("<html>not json</html>");
    });

    let error = client(&server).fetch_prices().await.unwrap_err();

    assert!(matches!(error, FeedError::Parse { .. }));
    assert!(!error.is_network());
}

#[tokio::test]
async fn one_failed_feed_fails_the_whole_snapshot() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/data/headlines.json");
        then.status(200).body(HEADLINES);
    });
    server.mock(|when, then| {
        when.method(GET).path("/data/prices.json");
        then.status(404);
    });

    let result = client(&server).fetch_snapshot().await;

    assert!(matches!(result, Err(FeedError::Status { .. })));
}

#[tokio::test]
async fn custom_paths_are_resolved_against_base() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/feeds/h.json");
        then.status(200).body(HEADLINES);
    });

    let config = FeedConfig::new(server.base_url()).with_headlines_path("/feeds/h.json");
    let headlines = FeedClient::new(config).unwrap().fetch_headlines().await.unwrap();

    mock.assert();
    assert_eq!(headlines.breaking.len(), 1);
}
