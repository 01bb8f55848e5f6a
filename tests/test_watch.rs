use std::time::Duration;

use chrono::{TimeZone, Utc};
use mockito::{Matcher, Server};

use btc_basis::model::{PriceSnapshot, Quote};
use btc_basis::watch::cache::SnapshotCache;
use btc_basis::watch::format::{
    format_currency, format_percentage, format_price, format_signed_percent, format_volume,
};
use btc_basis::{contract, fetch, watch};

// ── Formatting ──────────────────────────────────────────────────────

#[test]
fn prices_get_currency_grouping() {
    assert_eq!(format_price("60300"), "$60,300.00");
    assert_eq!(format_price("1234567.891"), "$1,234,567.89");
    assert_eq!(format_price("999.9"), "$999.90");
    assert_eq!(format_price("0.5"), "$0.50");
}

#[test]
fn unparseable_prices_are_shown_verbatim_not_dropped() {
    assert_eq!(format_price("n/a"), "n/a");
    assert_eq!(format_price(""), "");
}

#[test]
fn negative_amounts_carry_the_sign_before_the_currency() {
    assert_eq!(format_currency(-300.0), "-$300.00");
    assert_eq!(format_currency(300.0), "$300.00");
}

#[test]
fn volumes_scale_to_thousands_and_millions() {
    assert_eq!(format_volume("1234567.8"), "₿1.23M");
    assert_eq!(format_volume("45600"), "₿45.60K");
    assert_eq!(format_volume("999.994"), "₿999.99");
    assert_eq!(format_volume("not-a-volume"), "not-a-volume");
}

#[test]
fn percentages_are_signed_with_two_decimals() {
    assert_eq!(format_percentage("2"), "+2.00%");
    assert_eq!(format_percentage("-1.5"), "-1.50%");
    assert_eq!(format_signed_percent(0.0), "+0.00%");
}

// ── Cache staleness ─────────────────────────────────────────────────

fn sample_snapshot() -> PriceSnapshot {
    let quote = |symbol: &str, price: &str| Quote {
        symbol: symbol.to_string(),
        price: price.to_string(),
        price_change_percent: None,
        volume: None,
        open_time: None,
        close_time: None,
    };
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    PriceSnapshot::aggregate(
        quote("BTCUSDT", "60000.00"),
        quote("BTCUSD_240329", "60300.00"),
        now,
    )
    .unwrap()
}

#[test]
fn entries_are_fresh_within_the_ttl() {
    let mut cache = SnapshotCache::new(Duration::from_secs(60));
    cache.insert("key".to_string(), sample_snapshot());

    assert!(cache.fresh("key").is_some());
    assert!(cache.fresh("other-key").is_none());
}

#[test]
fn entries_age_out_but_remain_as_last_good_fallback() {
    let mut cache = SnapshotCache::new(Duration::ZERO);
    cache.insert("key".to_string(), sample_snapshot());

    // ttl of zero: immediately stale
    assert!(cache.fresh("key").is_none());

    let (snapshot, _age) = cache.last_good("key").expect("fallback entry");
    assert_eq!(snapshot.spot.symbol, "BTCUSDT");
}

#[test]
fn invalidation_forces_the_next_poll_to_refetch() {
    let mut cache = SnapshotCache::new(Duration::from_secs(60));
    cache.insert("key".to_string(), sample_snapshot());
    cache.invalidate("key");

    assert!(cache.fresh("key").is_none());
    assert!(cache.last_good("key").is_none());
}

// ── Poll loop semantics ─────────────────────────────────────────────

fn ticker_body(symbol: &str, last_price: &str) -> String {
    serde_json::json!({
        "symbol": symbol,
        "priceChangePercent": "0.84",
        "lastPrice": last_price,
        "volume": "45600.50",
        "openTime": 1705276800000_i64,
        "closeTime": 1705363200000_i64,
    })
    .to_string()
}

#[tokio::test]
async fn fresh_entries_short_circuit_the_upstream_fetch() {
    let mut server = Server::new_async().await;
    let futures_symbol = contract::next_quarter_symbol(Utc::now().date_naive());

    let spot = server
        .mock("GET", "/ticker/24hr")
        .match_query(Matcher::UrlEncoded("symbol".into(), "BTCUSDT".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ticker_body("BTCUSDT", "60000.00"))
        .expect(1)
        .create_async()
        .await;
    let futures = server
        .mock("GET", "/ticker/24hr")
        .match_query(Matcher::UrlEncoded(
            "symbol".into(),
            futures_symbol.clone(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ticker_body(&futures_symbol, "60300.00"))
        .expect(1)
        .create_async()
        .await;

    let client = fetch::build_client().unwrap();
    let mut cache = SnapshotCache::new(Duration::from_secs(300));
    let base = server.url();

    watch::poll_once(&client, &base, &base, "key", &mut cache).await;
    assert!(cache.fresh("key").is_some());

    // second poll within the ttl: served from cache, no upstream traffic
    watch::poll_once(&client, &base, &base, "key", &mut cache).await;

    spot.assert_async().await;
    futures.assert_async().await;
}

#[tokio::test]
async fn failed_poll_serves_stale_fallback_once_then_evicts() {
    // Bind then drop to get a port with nothing listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let base = format!("http://{addr}");

    let client = fetch::build_client().unwrap();
    let mut cache = SnapshotCache::new(Duration::ZERO);
    cache.insert("key".to_string(), sample_snapshot());

    // ttl of zero: the entry is already stale, so the poll refetches,
    // fails, renders the fallback once and evicts it
    watch::poll_once(&client, &base, &base, "key", &mut cache).await;
    assert!(cache.last_good("key").is_none());

    // a second failed poll has nothing left to fall back on
    watch::poll_once(&client, &base, &base, "key", &mut cache).await;
    assert!(cache.last_good("key").is_none());
}
