/// Decoding limits for the sentiment prompt.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Prompt tokens beyond this are truncated.
    pub max_input_tokens: usize,
    /// Maximum decoder length, counting the decoder start token.
    pub max_len: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_input_tokens: 512,
            max_len: 10,
        }
    }
}

pub const DEFAULT_MODEL_ID: &str = "google/flan-t5-base";
pub const DEFAULT_REVISION: &str = "main";

/// Settings used to build the process-wide classifier.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub model_id: String,
    pub revision: String,
    pub cpu: bool,
    pub generation: GenerationConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            revision: DEFAULT_REVISION.to_string(),
            cpu: false,
            generation: GenerationConfig::default(),
        }
    }
}

/// Pin the numeric runtimes' internal thread pools to a single thread.
///
/// Must be called at process start, before any other thread is spawned.
pub fn limit_compute_threads() {
    std::env::set_var("OMP_NUM_THREADS", "1");
    std::env::set_var("MKL_NUM_THREADS", "1");
}
