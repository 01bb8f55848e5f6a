use axum::Json;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::Utc;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::fetch;
use crate::model::PriceSnapshot;

/// The data route accepts every method so 405s can carry the JSON body the
/// dashboard expects; OPTIONS here covers plain non-preflight requests (the CORS
/// layer answers real preflights before they reach the handler).
pub async fn bitcoin_prices(
    method: Method,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    match method {
        Method::OPTIONS => Ok(StatusCode::OK.into_response()),
        Method::GET => match get_prices(&state).await {
            Ok(snapshot) => Ok(Json(snapshot).into_response()),
            Err(err) => {
                eprintln!("bitcoin-prices request failed: {err:?}");
                Err(err)
            }
        },
        _ => Err(ApiError::MethodNotAllowed),
    }
}

async fn get_prices(state: &AppState) -> Result<PriceSnapshot, ApiError> {
    let snapshot = fetch::fetch_snapshot(
        &state.client,
        &state.spot_base,
        &state.futures_base,
        Utc::now(),
    )
    .await?;

    Ok(snapshot)
}
