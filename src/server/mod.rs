//! HTTP API over the analyzer.
//!
//! | Method | Path            | Body                    |
//! |--------|-----------------|-------------------------|
//! | GET    | `/`             | -                       |
//! | POST   | `/ping`         | -                       |
//! | POST   | `/analyze_text` | JSON `{"text": "..."}`  |
//! | POST   | `/analyze_file` | multipart field `file`  |
//!
//! Analysis runs on the blocking thread pool; the model is shared through the
//! analyzer's lazily loaded classifier.

pub mod routes;

use crate::analyzer::LegalSentimentAnalyzer;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<LegalSentimentAnalyzer>,
    /// Directory for transient copies of uploaded files.
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn new(analyzer: LegalSentimentAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            upload_dir: std::env::temp_dir(),
        }
    }

    pub fn with_upload_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.upload_dir = dir.into();
        self
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/ping", post(routes::ping))
        .route("/analyze_text", post(routes::analyze_text))
        .route("/analyze_file", post(routes::analyze_file))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router(state)).await
}
