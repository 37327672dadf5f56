use crate::core::Result;
use tokenizers::Tokenizer;

/// A text-to-text model that can answer a sentiment prompt.
pub trait SentimentAnalysisModel: Send + Sync {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options, device: candle_core::Device) -> Result<Self>
    where
        Self: Sized;

    /// Generate a short continuation for `prompt` and return it decoded.
    fn generate(&self, tokenizer: &Tokenizer, prompt: &str) -> Result<String>;

    fn get_tokenizer(options: &Self::Options) -> Result<Tokenizer>;

    fn device(&self) -> &candle_core::Device;
}
