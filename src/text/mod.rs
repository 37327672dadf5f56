//! Text preparation ahead of classification.

pub mod normalizer;
pub mod segmenter;

pub use normalizer::normalize;
pub use segmenter::{segment, split_on_periods};

/// Sentences at or below this many characters (after trimming) are skipped.
pub const MIN_SENTENCE_CHARS: usize = 10;

/// Whether a sentence is long enough to be classified.
pub fn is_classifiable(sentence: &str) -> bool {
    sentence.trim().chars().count() > MIN_SENTENCE_CHARS
}
