pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::classify::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/classify/text",
            post(handlers::handle_classify_text),
        )
        .route(
            "/api/v1/classify/file",
            post(handlers::handle_classify_file),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
