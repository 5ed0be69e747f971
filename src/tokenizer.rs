use crate::error::{Error, Result};
use regex::Regex;

/// Splits a document into lowercase word tokens. Hyphenated words and
/// ellipses stay whole; other punctuation marks are kept as single-character
/// tokens so the filter can decide whether to drop them.
pub struct Tokenizer {
    regex: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(r"\w+(?:-\w+)*|\.{3}|[^\w\s]")
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
        })
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        self.regex
            .find_iter(&lowered)
            .map(|token| token.as_str().to_string())
            .collect()
    }
}
