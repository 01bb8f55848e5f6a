pub mod envelope;
pub mod quote;
pub mod snapshot;

pub use envelope::ErrorEnvelope;
pub use quote::Quote;
pub use snapshot::{PriceSnapshot, SnapshotError};

use chrono::{DateTime, SecondsFormat, Utc};

/// Timestamps on the wire use RFC 3339 with millisecond precision and a `Z` suffix.
pub fn rfc3339_millis(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
