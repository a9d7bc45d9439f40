use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. Requests share only this immutable configuration; assets
/// are re-read per request, so there is nothing else to share.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
