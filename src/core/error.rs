use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    // Input
    #[error("File {} not found.", .0.display())]
    InputNotFound(PathBuf),

    #[error("{0}")]
    Schema(String),

    #[error("Only TXT or CSV files allowed")]
    UnsupportedFileType,

    // Model
    #[error("Sentiment model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    #[error("Download failed: {0}")]
    Download(String),

    // Pass-through from dependencies
    #[error(transparent)]
    Candle(#[from] candle_core::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

impl From<hf_hub::api::sync::ApiError> for AnalyzerError {
    fn from(value: hf_hub::api::sync::ApiError) -> Self {
        AnalyzerError::Download(value.to_string())
    }
}
