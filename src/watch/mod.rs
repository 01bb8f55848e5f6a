pub mod cache;
pub mod format;

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::contract;
use crate::fetch;
use crate::model::PriceSnapshot;

use cache::SnapshotCache;

/// CLI entry point for the `watch` subcommand: poll on a fixed interval and
/// render spot/futures cards plus the premium analysis. On a failed poll the
/// last good snapshot is re-rendered with a stale marker.
pub async fn run(spot_base: &str, futures_base: &str, interval_secs: u64) -> Result<()> {
    let client = fetch::build_client().context("building http client")?;
    let interval = Duration::from_secs(interval_secs);
    let mut snapshots = SnapshotCache::new(interval);
    let key = format!("{spot_base}|{futures_base}");

    println!("btc-basis watch — polling every {interval_secs}s (ctrl-c to stop)");

    loop {
        poll_once(&client, spot_base, futures_base, &key, &mut snapshots).await;
        tokio::time::sleep(interval).await;
    }
}

/// One poll iteration. A still-fresh cache entry short-circuits the
/// upstream fetch; on a failed fetch the last good snapshot is rendered
/// with a stale marker and then evicted, so stale data is served at most
/// once before the next poll must refetch.
pub async fn poll_once(
    client: &reqwest::Client,
    spot_base: &str,
    futures_base: &str,
    key: &str,
    snapshots: &mut SnapshotCache,
) {
    if let Some(snapshot) = snapshots.fresh(key) {
        render(snapshot, None);
        return;
    }

    match fetch::fetch_snapshot(client, spot_base, futures_base, Utc::now()).await {
        Ok(snapshot) => {
            render(&snapshot, None);
            snapshots.insert(key.to_string(), snapshot);
        }
        Err(err) => {
            eprintln!("poll failed: {err:#}");
            if let Some((snapshot, age)) = snapshots.last_good(key) {
                render(snapshot, Some(age));
            }
            snapshots.invalidate(key);
        }
    }
}

fn render(snapshot: &PriceSnapshot, stale_age: Option<Duration>) {
    println!();
    match stale_age {
        Some(age) => println!("Bitcoin spot vs quarterly futures (stale, {}s old)", age.as_secs()),
        None => println!("Bitcoin spot vs quarterly futures"),
    }

    print_quote_line("Spot   ", &snapshot.spot);
    print_quote_line("Futures", &snapshot.futures);

    let side = if snapshot.premium_percentage >= 0.0 {
        "premium"
    } else {
        "discount"
    };
    println!(
        "  Basis    {} ({} futures {})",
        format::format_currency(snapshot.price_difference.abs()),
        format::format_signed_percent(snapshot.premium_percentage),
        side,
    );

    if let Some(days) = contract::days_to_expiry(&snapshot.futures.symbol, Utc::now().date_naive())
    {
        println!("  Expiry   {} days", days);
    }
    println!("  Updated  {}", snapshot.last_updated);
}

fn print_quote_line(label: &str, quote: &crate::model::Quote) {
    let change = quote
        .price_change_percent
        .as_deref()
        .map(format::format_percentage)
        .unwrap_or_else(|| "n/a".to_string());
    let volume = quote
        .volume
        .as_deref()
        .map(format::format_volume)
        .unwrap_or_else(|| "n/a".to_string());

    println!(
        "  {label}  {:<14} {:>14}  24h {:>8}  vol {}",
        quote.symbol,
        format::format_price(&quote.price),
        change,
        volume,
    );
}
