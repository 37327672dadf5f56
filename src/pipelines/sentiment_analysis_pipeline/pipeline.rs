use super::model::SentimentAnalysisModel;
use crate::classifier::SentimentClassifier;
use crate::core::Result;
use tokenizers::Tokenizer;

const PROMPT_PREFIX: &str =
    "Classify the sentiment of this legal text as Positive, Negative, or Neutral: ";

/// Build the instruction prompt for one sentence.
pub fn sentiment_prompt(text: &str) -> String {
    format!("{PROMPT_PREFIX}{text}")
}

pub struct SentimentAnalysisPipeline<M: SentimentAnalysisModel> {
    pub(crate) model: M,
    pub(crate) tokenizer: Tokenizer,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipeline<M> {
    /// Classify `text`, returning the generated label with surrounding
    /// whitespace removed. The label is whatever the model produced.
    pub fn predict(&self, text: &str) -> Result<String> {
        let generated = self
            .model
            .generate(&self.tokenizer, &sentiment_prompt(text))?;
        Ok(generated.trim().to_string())
    }

    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}

impl<M: SentimentAnalysisModel> SentimentClassifier for SentimentAnalysisPipeline<M> {
    fn classify(&self, sentence: &str) -> Result<String> {
        self.predict(sentence)
    }
}
