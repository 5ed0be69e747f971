use serde::Serialize;

use crate::{
    filter::{filter, FilterMode},
    tokenizer::Tokenizer,
};

pub type DocID = usize;

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Document {
    pub doc_id: DocID,
    pub text: String,
}

impl Document {
    pub const fn new(doc_id: DocID, text: String) -> Self {
        Self { doc_id, text }
    }

    pub fn tokenize(&self, tokenizer: &Tokenizer, mode: FilterMode) -> TokenizedDocument {
        TokenizedDocument::new(
            self.doc_id,
            filter(tokenizer.tokenize(self.text.trim()), mode),
        )
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TokenizedDocument {
    pub doc_id: DocID,
    pub tokens: Vec<String>,
}

impl TokenizedDocument {
    pub const fn new(doc_id: DocID, tokens: Vec<String>) -> Self {
        Self { doc_id, tokens }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.tokens.iter().any(|token| token == term)
    }

    pub fn count(&self, term: &str) -> usize {
        self.tokens.iter().filter(|token| *token == term).count()
    }
}
