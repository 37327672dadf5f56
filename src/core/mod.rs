pub mod cache;
pub mod config;
pub mod error;

pub use cache::LazyModel;
pub use config::{limit_compute_threads, AnalyzerConfig, GenerationConfig};
pub use error::{AnalyzerError, Result};
