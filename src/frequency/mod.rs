mod common;
mod engine;

use serde::Serialize;

use crate::{
    corpus::{DocID, Document},
    error::Result,
};

pub use self::{
    common::{most_common, rank_terms, CommonTerms, TermCount},
    engine::FrequencyEngine,
};

/// How often a term occurs in one document. Only produced for counts above zero.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct TermOccurrence {
    pub doc_id: DocID,
    pub raw_count: usize,
}

impl TermOccurrence {
    pub const fn new(doc_id: DocID, raw_count: usize) -> Self {
        Self { doc_id, raw_count }
    }
}

pub type Occurrences<'a> = Box<dyn Iterator<Item = Result<TermOccurrence>> + 'a>;
pub type DocIDs<'a> = Box<dyn Iterator<Item = Result<DocID>> + 'a>;

/// Counts the elements of a finite fallible sequence, stopping at the first error.
pub fn count<T>(items: impl IntoIterator<Item = Result<T>>) -> Result<usize> {
    items
        .into_iter()
        .try_fold(0, |total, item| item.map(|_| total + 1))
}

/// Per-term frequency queries over a corpus. Results are always in document
/// order and only cover documents that contain the term.
pub trait FrequencySource {
    /// Total number of documents, fixed for the lifetime of the source.
    fn document_count(&self) -> usize;

    fn raw_count_per_document<'a>(&'a self, term: &'a str) -> Result<Occurrences<'a>>;

    fn document(&self, doc_id: DocID) -> Result<Option<Document>>;

    /// The `n` most common terms of every document, in document order.
    fn most_common(&self, n: usize) -> Result<Vec<CommonTerms>>;

    fn documents_containing<'a>(&'a self, term: &'a str) -> Result<DocIDs<'a>> {
        Ok(Box::new(
            self.raw_count_per_document(term)?
                .map(|occurrence| occurrence.map(|occurrence| occurrence.doc_id)),
        ))
    }

    fn document_frequency(&self, term: &str) -> Result<usize> {
        count(self.documents_containing(term)?)
    }

    /// Stops at the first document containing `term`.
    fn contains_term(&self, term: &str) -> Result<bool> {
        Ok(self.documents_containing(term)?.next().transpose()?.is_some())
    }
}
