//! Tokenizer for catalog fields and search queries.
//!
//! Normalization rules: lowercase the input, replace every character that is
//! not alphanumeric, whitespace, or hyphen with a space, then split on runs
//! of whitespace, hyphens, and underscores. Tokens of length <= 1 are
//! dropped. The rules are deliberately simple; product vocabularies are full
//! of hyphenated and underscore-joined terms ("t-shirt", "usb_c") that must
//! split into their parts.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters to strip before splitting (everything except word
    /// characters, whitespace, and hyphens).
    static ref STRIP_PATTERN: Regex = Regex::new(r"[^\w\s-]").expect("strip pattern is valid");
    /// Token boundaries: whitespace, hyphen, and underscore runs.
    static ref SPLIT_PATTERN: Regex = Regex::new(r"[\s\-_]+").expect("split pattern is valid");
}

/// Tokenizer shared by the vocabulary builder and the query corrector.
#[derive(Debug, Clone, Default)]
pub struct QueryTokenizer;

impl QueryTokenizer {
    /// Create a new tokenizer.
    pub fn new() -> Self {
        QueryTokenizer
    }

    /// Tokenize the given text into normalized words.
    ///
    /// Empty input yields an empty vector; this never fails. The literal
    /// string "nan" is treated as absent: catalog exports stringify missing
    /// fields that way, and it must not become a vocabulary word.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.is_empty() || text == "nan" {
            return Vec::new();
        }

        let lowered = text.to_lowercase();
        let stripped = STRIP_PATTERN.replace_all(&lowered, " ");

        SPLIT_PATTERN
            .split(&stripped)
            .map(str::trim)
            .filter(|word| word.len() > 1)
            .map(str::to_string)
            .collect()
    }
}
