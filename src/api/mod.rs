pub mod error;
pub mod handlers;
pub mod state;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{any, get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::fetch;
use state::AppState;

/// Build the application router. Exposed so tests can bind it to an
/// ephemeral port with mock upstream bases.
///
/// The CORS layer answers preflights; the set-header layers put the same
/// contract on every other response too (200, 405 and 500 alike), since
/// dashboard clients read the payload cross-origin on all of them.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/bitcoin-prices", any(handlers::prices::bitcoin_prices))
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(state)
}

pub async fn serve(
    host: &str,
    port: u16,
    spot_base: String,
    futures_base: String,
) -> Result<()> {
    let client = fetch::build_client().context("building http client")?;
    let state = AppState {
        client,
        spot_base,
        futures_base,
    };
    let app = router(state);

    let addr = format!("{host}:{port}");
    println!("btc-basis API server listening on {addr}");
    println!("  Health: GET http://{addr}/health");
    println!("  Prices: GET http://{addr}/api/bitcoin-prices");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding to {addr}"))?;

    axum::serve(listener, app).await.context("running server")?;

    Ok(())
}
