use std::sync::Arc;

use crate::classify::ClassifyEngine;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. The engine (linguistic resources + model artifacts) is built
/// once at startup and shared read-only; nothing mutates it after load.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub engine: Arc<ClassifyEngine>,
}
