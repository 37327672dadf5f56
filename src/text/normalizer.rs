//! Whitespace cleanup and masking of personally identifying tokens.
//!
//! Masking is pattern based:
//! - `D{1,2}/D{1,2}/DDDD` dates become `[DATE]`
//! - two consecutive capitalized words become `[NAME]`
//!
//! The name pattern is a heuristic. It also masks ordinary capitalized
//! phrases such as "The Court"; callers get exactly that behavior. A pair
//! whose second word is an abbreviation followed by a period ("Counsel Mr.")
//! is left alone, so sentence segmentation still sees the abbreviation.

use super::segmenter::is_abbreviation;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub const DATE_PLACEHOLDER: &str = "[DATE]";
pub const NAME_PLACEHOLDER: &str = "[NAME]";

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}/\d{1,2}/\d{4}\b").expect("valid regex"));
static NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+ [A-Z][a-z]+\b").expect("valid regex"));

/// Collapse whitespace, trim, and mask dates and names.
pub fn normalize(raw: &str) -> String {
    let text = WHITESPACE.replace_all(raw.trim(), " ");
    let text = DATE.replace_all(&text, DATE_PLACEHOLDER);
    mask_names(&text)
}

fn mask_names(text: &str) -> String {
    NAME.replace_all(text, |caps: &Captures<'_>| {
        let found = &caps[0];
        let end = caps.get(0).map_or(text.len(), |m| m.end());
        let last_word = found.rsplit(' ').next().unwrap_or_default();
        if text[end..].starts_with('.') && is_abbreviation(last_word) {
            found.to_string()
        } else {
            NAME_PLACEHOLDER.to_string()
        }
    })
    .into_owned()
}
