use crate::frequency::TermCount;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Doc {
    pub text: String,
    pub ranked_terms: Vec<TermCount>,
}

impl Doc {
    pub const fn new(text: String, ranked_terms: Vec<TermCount>) -> Self {
        Self { text, ranked_terms }
    }
}

/// Documents in corpus order; `DocID` `n` lives at position `n - 1`.
pub type DocMap = Vec<Doc>;
