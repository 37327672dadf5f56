//! Sentence segmentation.
//!
//! Two splitters exist on purpose. Batch analysis uses Unicode sentence
//! boundaries ([`segment`]); the single-text endpoint splits on every `.`
//! ([`split_on_periods`]). They disagree on abbreviations, decimals and
//! `?`/`!` terminated sentences.

use unicode_segmentation::UnicodeSegmentation;

/// Lowercased tokens that end with a period without ending a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "hon", "rev", "jr", "sr", "st", "esq", "v", "vs", "no",
    "nos", "art", "sec", "para", "ch", "cl", "inc", "co", "corp", "ltd", "llc", "llp", "bros",
    "dept", "gov", "fig", "cf", "e.g", "i.e", "u.s", "approx", "ca", "cir", "supp",
];

/// Whether `word` (without its trailing period) is a known abbreviation or
/// a single-letter initial.
pub fn is_abbreviation(word: &str) -> bool {
    let lowered = word.to_lowercase();
    let mut chars = lowered.chars();
    let initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());
    initial || ABBREVIATIONS.contains(&lowered.as_str())
}

/// Whether `sentence` ends in an abbreviation such as "Mr." or "v.".
fn ends_with_abbreviation(sentence: &str) -> bool {
    let Some(head) = sentence.trim_end().strip_suffix('.') else {
        return false;
    };
    let word = head
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    !word.is_empty() && is_abbreviation(word)
}

/// Split text into trimmed sentences using UAX #29 sentence boundaries.
///
/// A boundary directly after an abbreviation ("Mr.", "v.", "Inc.") is not
/// treated as the end of a sentence.
pub fn segment(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut pending = String::new();

    for piece in text.split_sentence_bounds() {
        pending.push_str(piece);
        if !ends_with_abbreviation(&pending) {
            push_trimmed(&mut sentences, &pending);
            pending.clear();
        }
    }
    push_trimmed(&mut sentences, &pending);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, sentence: &str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

/// Split on the literal `.` character. Pieces are returned untrimmed,
/// including empty ones.
pub fn split_on_periods(text: &str) -> Vec<String> {
    text.split('.').map(str::to_string).collect()
}
