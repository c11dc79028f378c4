use crate::error::{Error, Result};
use regex::Regex;

/// Words too common to carry any relevance signal.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "will", "with",
];

/// Minimum token length (in chars) for a token to survive filtering.
const MIN_TOKEN_LEN: usize = 3;

pub struct Tokenizer {
    regex: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(r"\w+")
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
        })
    }

    /// Splits `text` into lower-cased word tokens, dropping stop words and
    /// tokens shorter than [`MIN_TOKEN_LEN`]. Order is preserved and
    /// duplicates are kept.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|token| token.as_str().to_lowercase())
            .filter(|token| {
                token.chars().count() >= MIN_TOKEN_LEN && !STOP_WORDS.contains(&token.as_str())
            })
            .collect()
    }
}
