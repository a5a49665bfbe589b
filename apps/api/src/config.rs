use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the serialized TF-IDF vectorizer artifact.
    pub vectorizer_path: String,
    /// Path to the serialized classifier artifact.
    pub classifier_path: String,
    pub port: u16,
    /// Upper bound on uploaded resume size, enforced via `DefaultBodyLimit`.
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            vectorizer_path: std::env::var("VECTORIZER_PATH")
                .unwrap_or_else(|_| "artifacts/vectorizer.json".to_string()),
            classifier_path: std::env::var("CLASSIFIER_PATH")
                .unwrap_or_else(|_| "artifacts/classifier.json".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a valid byte count")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
