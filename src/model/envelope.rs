use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::rfc3339_millis;

/// Uniform error payload returned on any failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorEnvelope {
    /// Machine-readable code. Every handler failure carries `FETCH_ERROR`.
    pub error: String,
    /// Human-readable description of what went wrong.
    pub message: String,
    /// RFC 3339 timestamp of when the failure was observed.
    pub timestamp: String,
}

impl ErrorEnvelope {
    pub const FETCH_ERROR: &'static str = "FETCH_ERROR";

    pub fn fetch_error(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            error: Self::FETCH_ERROR.to_string(),
            message: message.into(),
            timestamp: rfc3339_millis(now),
        }
    }
}
