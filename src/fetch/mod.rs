use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::contract;
use crate::model::{PriceSnapshot, Quote};
use crate::validate;

pub const DEFAULT_SPOT_BASE: &str = "https://api.binance.com/api/v3";
pub const DEFAULT_FUTURES_BASE: &str = "https://fapi.binance.com/fapi/v1";

/// Spot market pair the dashboard tracks.
pub const SPOT_SYMBOL: &str = "BTCUSDT";

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream returned HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("decoding response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

// ── Upstream response types ──────────────────────────────────────────

/// Fields of the exchange's 24hr ticker statistics we consume.
/// The endpoint returns more; everything else is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24h {
    pub symbol: String,
    pub last_price: String,
    pub price_change_percent: Option<String>,
    pub volume: Option<String>,
    pub open_time: Option<i64>,
    pub close_time: Option<i64>,
}

impl From<Ticker24h> for Quote {
    fn from(ticker: Ticker24h) -> Self {
        Quote {
            symbol: ticker.symbol,
            price: ticker.last_price,
            price_change_percent: ticker.price_change_percent,
            volume: ticker.volume,
            open_time: ticker.open_time,
            close_time: ticker.close_time,
        }
    }
}

// ── Public API ───────────────────────────────────────────────────────

/// Shared HTTP client with a fixed request timeout.
pub fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
}

pub fn ticker_url(base: &str, symbol: &str) -> String {
    format!("{}/ticker/24hr?symbol={}", base.trim_end_matches('/'), symbol)
}

/// Single-attempt GET of a 24hr ticker. No retry and no backoff: a failed
/// call fails the whole request and the caller decides when to poll again.
pub async fn fetch_ticker(
    client: &reqwest::Client,
    url: &str,
) -> Result<Ticker24h, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status,
            url: url.to_string(),
        });
    }

    response
        .json::<Ticker24h>()
        .await
        .map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
}

/// Fetch spot and quarterly-futures quotes, aggregate, and gate the result
/// through payload validation. The two fetches have no ordering dependency,
/// so they run concurrently and are joined before aggregation.
pub async fn fetch_snapshot(
    client: &reqwest::Client,
    spot_base: &str,
    futures_base: &str,
    now: DateTime<Utc>,
) -> Result<PriceSnapshot> {
    let futures_symbol = contract::next_quarter_symbol(now.date_naive());
    let spot_url = ticker_url(spot_base, SPOT_SYMBOL);
    let futures_url = ticker_url(futures_base, &futures_symbol);

    let (spot, futures) = tokio::try_join!(
        fetch_ticker(client, &spot_url),
        fetch_ticker(client, &futures_url),
    )?;

    let snapshot = PriceSnapshot::aggregate(spot.into(), futures.into(), now)?;

    if let Err(errors) = validate::validate_snapshot(&snapshot) {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        bail!("snapshot failed validation: {joined}");
    }

    Ok(snapshot)
}

/// CLI entry point for the `quote` subcommand: fetch once, print JSON.
pub async fn run(spot_base: &str, futures_base: &str, pretty: bool) -> Result<()> {
    let client = build_client().context("building http client")?;
    let snapshot = fetch_snapshot(&client, spot_base, futures_base, Utc::now()).await?;

    let json = if pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{json}");

    Ok(())
}
