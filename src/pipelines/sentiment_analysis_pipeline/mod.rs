//! Sentiment analysis pipeline for legal text.
//!
//! A sentence is embedded into a fixed instruction prompt and answered by a
//! text-to-text model (FLAN-T5 by default). The answer is returned verbatim
//! after trimming, so it may fall outside Positive/Negative/Neutral.
//!
//! ## Main Types
//!
//! - [`SentimentAnalysisPipeline`] - Prompt construction and prediction
//! - [`SentimentAnalysisPipelineBuilder`] - Builder pattern for pipeline configuration
//! - [`SentimentAnalysisModel`] - Trait for model implementations
//! - [`FlanT5Size`] - Available checkpoint options
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use legal_sentiment::pipelines::sentiment_analysis_pipeline::*;
//!
//! let pipeline = SentimentAnalysisPipelineBuilder::flan_t5(FlanT5Size::Base)
//!     .cpu()
//!     .build()?;
//!
//! let label = pipeline.predict("The defendant breached the agreement.")?;
//! println!("Sentiment: {label}");
//! # Ok::<(), legal_sentiment::core::AnalyzerError>(())
//! ```

pub mod builder;
pub mod model;
pub mod pipeline;

pub use builder::SentimentAnalysisPipelineBuilder;
pub use model::SentimentAnalysisModel;
pub use pipeline::{sentiment_prompt, SentimentAnalysisPipeline};

pub use crate::models::{FlanT5Options, FlanT5Size};
