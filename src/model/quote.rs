use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single market quote as served to dashboard clients.
///
/// Prices and volumes stay decimal strings exactly as the exchange reports
/// them; numeric parsing happens only where derived fields are computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    /// Last traded price as a decimal string.
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    /// Start of the 24h statistics window, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_time: Option<i64>,
    /// End of the 24h statistics window, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_time: Option<i64>,
}
