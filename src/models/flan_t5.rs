//! FLAN-T5 wrapper for instruction-style sentiment prompts.
//!
//! Uses `candle_transformers::models::t5` for the underlying implementation.

use crate::core::{AnalyzerError, GenerationConfig, Result};
use crate::loaders::{ConfigLoader, TokenizerLoader, WeightsLoader};
use crate::pipelines::sentiment_analysis_pipeline::SentimentAnalysisModel;
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::generation::{LogitsProcessor, Sampling};
use candle_transformers::models::t5::{self, T5ForConditionalGeneration};
use std::sync::Mutex;
use tokenizers::{Tokenizer, TruncationParams};

/// Available FLAN-T5 checkpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlanT5Size {
    Small,
    Base,
    Large,
}

impl FlanT5Size {
    pub fn model_id(&self) -> &'static str {
        match self {
            FlanT5Size::Small => "google/flan-t5-small",
            FlanT5Size::Base => "google/flan-t5-base",
            FlanT5Size::Large => "google/flan-t5-large",
        }
    }
}

impl std::fmt::Display for FlanT5Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FlanT5Size::Small => "flan-t5-small",
            FlanT5Size::Base => "flan-t5-base",
            FlanT5Size::Large => "flan-t5-large",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone)]
pub struct FlanT5Options {
    pub model_id: String,
    pub revision: String,
    pub generation: GenerationConfig,
}

impl From<FlanT5Size> for FlanT5Options {
    fn from(size: FlanT5Size) -> Self {
        Self {
            model_id: size.model_id().to_string(),
            revision: "main".to_string(),
            generation: GenerationConfig::default(),
        }
    }
}

impl Default for FlanT5Options {
    fn default() -> Self {
        FlanT5Size::Base.into()
    }
}

/// FLAN-T5 encoder-decoder with greedy decoding.
///
/// The decoder keeps a KV cache, so generation takes the model lock for the
/// whole call.
pub struct FlanT5Model {
    model: Mutex<T5ForConditionalGeneration>,
    config: t5::Config,
    device: Device,
    generation: GenerationConfig,
}

impl SentimentAnalysisModel for FlanT5Model {
    type Options = FlanT5Options;

    fn new(options: Self::Options, device: Device) -> Result<Self> {
        let config: t5::Config =
            ConfigLoader::new(&options.model_id, &options.revision, "config.json").load()?;
        let weights_filename = WeightsLoader::new(&options.model_id, &options.revision).load()?;

        let dtype = DType::F32;
        let vb = if weights_filename
            .extension()
            .is_some_and(|ext| ext == "safetensors")
        {
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_filename], dtype, &device)? }
        } else {
            VarBuilder::from_pth(&weights_filename, dtype, &device)?
        };

        let model = T5ForConditionalGeneration::load(vb, &config)?;

        Ok(Self {
            model: Mutex::new(model),
            config,
            device,
            generation: options.generation,
        })
    }

    fn generate(&self, tokenizer: &Tokenizer, prompt: &str) -> Result<String> {
        let encoding = tokenizer
            .encode(prompt, true)
            .map_err(|e| AnalyzerError::Tokenization(e.to_string()))?;
        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;

        let mut model = self
            .model
            .lock()
            .map_err(|_| AnalyzerError::ModelUnavailable("model lock poisoned".to_string()))?;
        model.clear_kv_cache();

        let encoder_output = model.encode(&input_ids)?;
        let start_token = self
            .config
            .decoder_start_token_id
            .unwrap_or(self.config.pad_token_id) as u32;
        let mut output_ids = vec![start_token];
        let mut logits_processor = LogitsProcessor::from_sampling(0, Sampling::ArgMax);

        while output_ids.len() < self.generation.max_len {
            let decoder_input = if output_ids.len() == 1 || !self.config.use_cache {
                Tensor::new(output_ids.as_slice(), &self.device)?.unsqueeze(0)?
            } else {
                let last = output_ids[output_ids.len() - 1];
                Tensor::new(&[last], &self.device)?.unsqueeze(0)?
            };

            let logits = model.decode(&decoder_input, &encoder_output)?.squeeze(0)?;
            let next_token = logits_processor.sample(&logits)?;
            if next_token as usize == self.config.eos_token_id {
                break;
            }
            output_ids.push(next_token);
        }
        model.clear_kv_cache();

        tokenizer
            .decode(&output_ids[1..], true)
            .map_err(|e| AnalyzerError::Tokenization(e.to_string()))
    }

    fn get_tokenizer(options: &Self::Options) -> Result<Tokenizer> {
        let mut tokenizer =
            TokenizerLoader::new(&options.model_id, &options.revision, "tokenizer.json").load()?;

        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: options.generation.max_input_tokens,
                ..Default::default()
            }))
            .map_err(|e| AnalyzerError::Tokenization(e.to_string()))?;

        Ok(tokenizer)
    }

    fn device(&self) -> &Device {
        &self.device
    }
}
