use serde::Serialize;
use tracing::debug;

use crate::{
    corpus::{DocID, Document},
    error::Result,
    frequency::{CommonTerms, FrequencySource},
    scorer::{self, TermReport},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WordLookup {
    Found(TermReport),
    NotFound { term: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentLookup {
    Found(Document),
    NotFound { doc_id: DocID },
}

/// Query surface over a [`FrequencySource`]. Each lookup is independent.
pub struct Analyzer<S> {
    source: S,
}

impl<S: FrequencySource> Analyzer<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    pub fn lookup_word(&self, term: &str) -> Result<WordLookup> {
        if !self.source.contains_term(term)? {
            debug!(term, "term not found");
            return Ok(WordLookup::NotFound {
                term: term.to_string(),
            });
        }

        let document_frequency = self.source.document_frequency(term)?;
        let report = scorer::score(
            term,
            self.source.document_count(),
            document_frequency,
            self.source.raw_count_per_document(term)?,
        )?;

        debug!(term, document_frequency, idf = report.idf, "scored term");

        Ok(WordLookup::Found(report))
    }

    pub fn lookup_document(&self, doc_id: DocID) -> Result<DocumentLookup> {
        Ok(self
            .source
            .document(doc_id)?
            .map_or(DocumentLookup::NotFound { doc_id }, DocumentLookup::Found))
    }

    pub fn most_common(&self, n: usize) -> Result<Vec<CommonTerms>> {
        self.source.most_common(n)
    }
}
