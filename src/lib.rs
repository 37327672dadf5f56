pub mod analyzer;
pub mod classifier;
pub mod core;
pub mod insights;
mod loaders;
pub mod models;
pub mod pipelines;
pub mod server;
pub mod text;

// Re-export the types most callers need
pub use analyzer::{Analysis, LegalSentimentAnalyzer, SentenceRecord};
pub use classifier::{LazyClassifier, SentimentClassifier, SharedClassifier};
pub use crate::core::{AnalyzerConfig, AnalyzerError, Result};
pub use insights::{summarize, SentimentLabel, Summary, Tone};
