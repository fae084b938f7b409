use std::sync::Arc;

use crate::config::Config;
use crate::embedder::Embedder;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Embedding provider, constructed once at startup and shared read-only
    /// across all requests. Swap implementations without touching handlers.
    pub embedder: Arc<dyn Embedder>,
}
