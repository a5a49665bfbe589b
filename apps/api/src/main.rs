mod classify;
mod config;
mod errors;
mod extract;
mod model;
mod nlp;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::classify::ClassifyEngine;
use crate::config::Config;
use crate::model::ModelArtifacts;
use crate::nlp::{Lexicon, TextNormalizer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume classifier API v{}", env!("CARGO_PKG_VERSION"));

    // Load the fixed linguistic resources and the pre-trained artifacts.
    // Any failure here is fatal: the service does not start degraded.
    let lexicon = Lexicon::load()?;
    info!("Linguistic resources loaded");

    let artifacts = ModelArtifacts::load(&config.vectorizer_path, &config.classifier_path)?;

    let engine = Arc::new(ClassifyEngine::new(TextNormalizer::new(lexicon), artifacts));

    let state = AppState {
        config: config.clone(),
        engine,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
