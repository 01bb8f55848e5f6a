/// Shared, immutable per-process state. The reqwest client carries the
/// connection pool; cloning it is cheap and requests stay fully isolated.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub spot_base: String,
    pub futures_base: String,
}
