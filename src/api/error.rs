use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde_json::json;

use crate::model::ErrorEnvelope;
use crate::validate;

#[derive(Debug)]
pub enum ApiError {
    /// Inbound method is neither GET nor OPTIONS.
    MethodNotAllowed,
    /// Anything that went wrong while producing the snapshot. All such
    /// failures surface as one envelope with code `FETCH_ERROR`.
    Fetch(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "error": "Method not allowed" })),
            )
                .into_response(),
            ApiError::Fetch(message) => {
                let envelope = ErrorEnvelope::fetch_error(message, Utc::now());
                // The failure payload passes the same gate as the success
                // payload. A malformed envelope has no fallback body: the
                // 500 goes out empty rather than with an invalid shape.
                match validate::validate_envelope(&envelope) {
                    Ok(()) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
                    }
                    Err(errors) => {
                        eprintln!("error envelope failed validation: {errors:?}");
                        StatusCode::INTERNAL_SERVER_ERROR.into_response()
                    }
                }
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Fetch(format!("{:#}", err))
    }
}
