//! The sentence classification seam.
//!
//! Everything downstream of the model only needs [`SentimentClassifier`]. The
//! production implementation is a FLAN-T5 [`SentimentAnalysisPipeline`] held
//! in a [`LazyClassifier`]; tests substitute their own implementations.
//!
//! [`SentimentAnalysisPipeline`]: crate::pipelines::SentimentAnalysisPipeline

use crate::core::{AnalyzerConfig, LazyModel, Result};
use crate::models::{FlanT5Model, FlanT5Options};
use crate::pipelines::SentimentAnalysisPipelineBuilder;
use std::sync::Arc;

/// Returns a free-form sentiment label for one sentence.
pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, sentence: &str) -> Result<String>;
}

impl<C: SentimentClassifier + ?Sized> SentimentClassifier for Arc<C> {
    fn classify(&self, sentence: &str) -> Result<String> {
        (**self).classify(sentence)
    }
}

pub type SharedClassifier = Arc<dyn SentimentClassifier>;

/// A classifier that is loaded on first use and shared afterwards.
pub struct LazyClassifier {
    model: LazyModel<SharedClassifier>,
}

impl LazyClassifier {
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Result<SharedClassifier> + Send + Sync + 'static,
    {
        Self {
            model: LazyModel::new(loader),
        }
    }

    /// A lazily built FLAN-T5 pipeline using the given settings.
    pub fn from_config(config: AnalyzerConfig) -> Self {
        Self::new(move || {
            let options = FlanT5Options {
                model_id: config.model_id.clone(),
                revision: config.revision.clone(),
                generation: config.generation.clone(),
            };
            let mut builder = SentimentAnalysisPipelineBuilder::<FlanT5Model>::new(options);
            if config.cpu {
                builder = builder.cpu();
            }
            let pipeline = builder.build()?;
            tracing::info!(model = %config.model_id, device = ?pipeline.device(), "sentiment model loaded");
            Ok(Arc::new(pipeline) as SharedClassifier)
        })
    }

    pub fn get(&self) -> Result<SharedClassifier> {
        self.model.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_loaded()
    }
}

impl SentimentClassifier for LazyClassifier {
    fn classify(&self, sentence: &str) -> Result<String> {
        self.get()?.classify(sentence)
    }
}
