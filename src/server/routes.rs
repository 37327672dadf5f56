use super::AppState;
use crate::analyzer::{Analysis, SentenceRecord};
use crate::core::{AnalyzerError, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const UPLOAD_FIELD: &str = "file";
const ALLOWED_EXTENSIONS: [&str; 2] = [".txt", ".csv"];

#[derive(Debug, Deserialize)]
pub struct TextInput {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub results: Vec<SentenceRecord>,
    pub summary: String,
}

impl From<Analysis> for AnalysisResponse {
    fn from(analysis: Analysis) -> Self {
        Self {
            summary: analysis.summary.to_string(),
            results: analysis.records,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn new(error: impl ToString) -> Json<Self> {
        Json(Self {
            error: error.to_string(),
        })
    }
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Backend is running 🚀" }))
}

pub async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn analyze_text(
    State(state): State<AppState>,
    input: std::result::Result<Json<TextInput>, JsonRejection>,
) -> Response {
    let Json(input) = match input {
        Ok(input) => input,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "rejected text analysis body");
            return (rejection.status(), ErrorResponse::new(rejection.body_text())).into_response();
        }
    };
    let analyzer = state.analyzer.clone();
    let outcome =
        tokio::task::spawn_blocking(move || analyzer.analyze_text(&input.text)).await;

    match outcome {
        Ok(Ok(analysis)) => Json(AnalysisResponse::from(analysis)).into_response(),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "text analysis failed");
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(e)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "text analysis task aborted");
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(e)).into_response()
        }
    }
}

pub async fn analyze_file(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let (filename, payload) = loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse::new(format!("missing multipart field '{UPLOAD_FIELD}'")),
                )
                    .into_response();
            }
            Err(e) => return (e.status(), ErrorResponse::new(e.body_text())).into_response(),
        };
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if !is_allowed_upload(&filename) {
            return ErrorResponse::new(AnalyzerError::UnsupportedFileType).into_response();
        }
        match field.bytes().await {
            Ok(payload) => break (filename, payload),
            Err(e) => return (e.status(), ErrorResponse::new(e.body_text())).into_response(),
        }
    };

    tracing::info!(%filename, bytes = payload.len(), "file analysis requested");
    let analyzer = state.analyzer.clone();
    let upload_dir = state.upload_dir.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        let staged = stage_upload(&upload_dir, &filename, &payload)?;
        // `staged` is removed from disk when dropped, on success and on error.
        analyzer.process_file(staged.path())
    })
    .await;

    match outcome {
        Ok(Ok(analysis)) => Json(AnalysisResponse::from(analysis)).into_response(),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "file analysis failed");
            ErrorResponse::new(e).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "file analysis task aborted");
            ErrorResponse::new(e).into_response()
        }
    }
}

pub fn is_allowed_upload(filename: &str) -> bool {
    ALLOWED_EXTENSIONS.iter().any(|ext| filename.ends_with(ext))
}

/// Write an upload to a transient file that keeps the original extension.
fn stage_upload(dir: &Path, filename: &str, payload: &[u8]) -> Result<NamedTempFile> {
    let extension = ALLOWED_EXTENSIONS
        .iter()
        .find(|ext| filename.ends_with(*ext))
        .copied()
        .unwrap_or_default();

    let mut staged = tempfile::Builder::new()
        .prefix("temp_")
        .suffix(extension)
        .tempfile_in(dir)?;
    staged.write_all(payload)?;
    staged.flush()?;
    Ok(staged)
}
