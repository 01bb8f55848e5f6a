use chrono::DateTime;
use thiserror::Error;

use crate::contract;
use crate::model::{ErrorEnvelope, PriceSnapshot};

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("required field `{field}` is empty")]
    EmptyField { field: &'static str },

    #[error("field `{field}` value `{value}` is not a finite number")]
    NonNumericField { field: &'static str, value: String },

    #[error("field `{field}` is not finite")]
    NonFiniteNumber { field: &'static str },

    #[error("futures symbol `{symbol}` does not match BTCUSD_YYMMDD")]
    BadContractSymbol { symbol: String },

    #[error("field `{field}` value `{value}` is not an RFC 3339 timestamp")]
    BadTimestamp { field: &'static str, value: String },
}

/// Gate a snapshot before it leaves the process boundary, collecting all
/// violations. The payload is never transformed; a failure here is fatal
/// for the request that produced it.
pub fn validate_snapshot(snapshot: &PriceSnapshot) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_nonempty("spot.symbol", &snapshot.spot.symbol, &mut errors);
    check_numeric_string("spot.price", &snapshot.spot.price, &mut errors);
    check_numeric_string("futures.price", &snapshot.futures.price, &mut errors);

    if contract::expiry_date(&snapshot.futures.symbol).is_none() {
        errors.push(ValidationError::BadContractSymbol {
            symbol: snapshot.futures.symbol.clone(),
        });
    }

    check_finite("priceDifference", snapshot.price_difference, &mut errors);
    check_finite("premiumPercentage", snapshot.premium_percentage, &mut errors);
    check_timestamp("lastUpdated", &snapshot.last_updated, &mut errors);

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Same gate for the failure payload: every field present and well-formed.
pub fn validate_envelope(envelope: &ErrorEnvelope) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_nonempty("error", &envelope.error, &mut errors);
    check_nonempty("message", &envelope.message, &mut errors);
    check_timestamp("timestamp", &envelope.timestamp, &mut errors);

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_nonempty(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.is_empty() {
        errors.push(ValidationError::EmptyField { field });
    }
}

fn check_numeric_string(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => {}
        _ => errors.push(ValidationError::NonNumericField {
            field,
            value: value.to_string(),
        }),
    }
}

fn check_finite(field: &'static str, value: f64, errors: &mut Vec<ValidationError>) {
    if !value.is_finite() {
        errors.push(ValidationError::NonFiniteNumber { field });
    }
}

fn check_timestamp(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if DateTime::parse_from_rfc3339(value).is_err() {
        errors.push(ValidationError::BadTimestamp {
            field,
            value: value.to_string(),
        });
    }
}
