use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::quote::Quote;
use super::rfc3339_millis;

#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("{side} price `{raw}` is not a finite number")]
    NonNumericPrice { side: &'static str, raw: String },

    #[error("{side} price `{raw}` must be positive")]
    NonPositivePrice { side: &'static str, raw: String },
}

/// Combined spot/futures view served on the data route.
///
/// Built once per request and never mutated; `last_updated` is the wall-clock
/// time at aggregation, not an upstream-reported time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceSnapshot {
    pub spot: Quote,
    pub futures: Quote,
    /// futures price minus spot price.
    pub price_difference: f64,
    /// 100 × price_difference / spot price. Positive means futures premium.
    pub premium_percentage: f64,
    /// RFC 3339 timestamp of aggregation.
    pub last_updated: String,
}

impl PriceSnapshot {
    /// Combine the two quotes and compute the derived premium fields.
    ///
    /// A price that fails to parse, is non-finite, or is not strictly
    /// positive fails aggregation outright instead of letting NaN or
    /// Infinity reach the wire.
    pub fn aggregate(
        spot: Quote,
        futures: Quote,
        now: DateTime<Utc>,
    ) -> Result<Self, SnapshotError> {
        let spot_price = parse_price("spot", &spot.price)?;
        let futures_price = parse_price("futures", &futures.price)?;

        let price_difference = futures_price - spot_price;
        let premium_percentage = price_difference / spot_price * 100.0;

        Ok(Self {
            spot,
            futures,
            price_difference,
            premium_percentage,
            last_updated: rfc3339_millis(now),
        })
    }
}

fn parse_price(side: &'static str, raw: &str) -> Result<f64, SnapshotError> {
    let value: f64 = raw.trim().parse().map_err(|_| SnapshotError::NonNumericPrice {
        side,
        raw: raw.to_string(),
    })?;

    if !value.is_finite() {
        return Err(SnapshotError::NonNumericPrice {
            side,
            raw: raw.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(SnapshotError::NonPositivePrice {
            side,
            raw: raw.to_string(),
        });
    }

    Ok(value)
}
