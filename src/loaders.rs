//! Hugging Face Hub loaders for model assets.
//!
//! - [`HfLoader`] - Resolves a single file from a model repository
//! - [`TokenizerLoader`] - Loads a `tokenizer.json`
//! - [`ConfigLoader`] - Loads and deserializes a JSON config file
//! - [`WeightsLoader`] - Locates model weights (`.safetensors`, falling back to `.bin`)
//!
//! Files are cached locally by `hf-hub`. Failed downloads are reported as-is
//! and never retried.

use crate::core::{AnalyzerError, Result};
use hf_hub::api::sync::Api as HfApi;
use hf_hub::{Repo, RepoType};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tokenizers::Tokenizer;

#[derive(Debug, Clone)]
pub struct HfLoader {
    pub repo: String,
    pub revision: String,
    pub filename: String,
}

impl HfLoader {
    pub fn new(repo: &str, revision: &str, filename: &str) -> Self {
        Self {
            repo: repo.into(),
            revision: revision.into(),
            filename: filename.into(),
        }
    }

    pub fn load(&self) -> Result<PathBuf> {
        let hf_api = HfApi::new()?;
        let hf_repo = hf_api.repo(Repo::with_revision(
            self.repo.clone(),
            RepoType::Model,
            self.revision.clone(),
        ));

        tracing::debug!(repo = %self.repo, file = %self.filename, "resolving hub file");
        Ok(hf_repo.get(self.filename.as_str())?)
    }
}

#[derive(Debug, Clone)]
pub struct TokenizerLoader {
    pub tokenizer_file_loader: HfLoader,
}

impl TokenizerLoader {
    pub fn new(repo: &str, revision: &str, filename: &str) -> Self {
        Self {
            tokenizer_file_loader: HfLoader::new(repo, revision, filename),
        }
    }

    pub fn load(&self) -> Result<Tokenizer> {
        let tokenizer_file_path = self.tokenizer_file_loader.load()?;

        Tokenizer::from_file(&tokenizer_file_path).map_err(|e| {
            AnalyzerError::Tokenization(format!(
                "failed to read {}: {e}",
                tokenizer_file_path.display()
            ))
        })
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    pub config_file_loader: HfLoader,
}

impl ConfigLoader {
    pub fn new(repo: &str, revision: &str, filename: &str) -> Self {
        Self {
            config_file_loader: HfLoader::new(repo, revision, filename),
        }
    }

    pub fn load<C: DeserializeOwned>(&self) -> Result<C> {
        let config_file_path = self.config_file_loader.load()?;
        let config_content = std::fs::read_to_string(config_file_path)?;
        Ok(serde_json::from_str(&config_content)?)
    }
}

#[derive(Debug, Clone)]
pub struct WeightsLoader {
    pub repo: String,
    pub revision: String,
}

impl WeightsLoader {
    pub fn new(repo: &str, revision: &str) -> Self {
        Self {
            repo: repo.into(),
            revision: revision.into(),
        }
    }

    pub fn load(&self) -> Result<PathBuf> {
        match HfLoader::new(&self.repo, &self.revision, "model.safetensors").load() {
            Ok(safetensors) => Ok(safetensors),
            Err(_) => HfLoader::new(&self.repo, &self.revision, "pytorch_model.bin")
                .load()
                .map_err(|e| {
                    AnalyzerError::Download(format!(
                        "model weights not found in {}. Expected `model.safetensors` or `pytorch_model.bin`: {e}",
                        self.repo
                    ))
                }),
        }
    }
}
