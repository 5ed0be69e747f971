mod doc_map;

use std::collections::HashMap;

use tracing::debug;

use self::doc_map::{Doc, DocMap};
use crate::{
    corpus::{Corpus, DocID, Document},
    error::Result,
    filter::FilterMode,
    frequency::{rank_terms, CommonTerms, FrequencySource, Occurrences, TermOccurrence},
    tokenizer::Tokenizer,
};

/// Postings for a term, in document order.
pub type Postings = Vec<TermOccurrence>;

/// Term to postings map built with a single pass over the corpus. Answers the
/// same queries as [`crate::frequency::FrequencyEngine`] without touching the
/// file again.
#[derive(Debug)]
pub struct InvertedIndex {
    postings: HashMap<String, Postings>,
    doc_map: DocMap,
}

impl InvertedIndex {
    pub fn build(corpus: &Corpus, tokenizer: &Tokenizer, mode: FilterMode) -> Result<Self> {
        let mut postings: HashMap<String, Postings> = HashMap::new();
        let mut doc_map = DocMap::with_capacity(corpus.document_count());

        for document in corpus.documents()? {
            let document = document?;
            let tokens = document.tokenize(tokenizer, mode).tokens;
            let ranked_terms = rank_terms(&tokens);

            for term_count in &ranked_terms {
                postings
                    .entry(term_count.term.clone())
                    .or_default()
                    .push(TermOccurrence::new(document.doc_id, term_count.count));
            }

            doc_map.push(Doc::new(document.text, ranked_terms));
        }

        debug!(
            mode = ?mode,
            documents = doc_map.len(),
            terms = postings.len(),
            "built inverted index"
        );

        Ok(Self { postings, doc_map })
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn postings(&self, term: &str) -> Option<&Postings> {
        self.postings.get(term)
    }
}

impl FrequencySource for InvertedIndex {
    fn document_count(&self) -> usize {
        self.doc_map.len()
    }

    fn raw_count_per_document<'a>(&'a self, term: &'a str) -> Result<Occurrences<'a>> {
        Ok(Box::new(
            self.postings(term)
                .into_iter()
                .flatten()
                .map(|occurrence| -> Result<TermOccurrence> { Ok(*occurrence) }),
        ))
    }

    fn document(&self, doc_id: DocID) -> Result<Option<Document>> {
        Ok(doc_id
            .checked_sub(1)
            .and_then(|position| self.doc_map.get(position))
            .map(|doc| Document::new(doc_id, doc.text.clone())))
    }

    fn most_common(&self, n: usize) -> Result<Vec<CommonTerms>> {
        Ok(self
            .doc_map
            .iter()
            .enumerate()
            .map(|(position, doc)| {
                CommonTerms::new(
                    position + 1,
                    doc.ranked_terms.iter().take(n).cloned().collect(),
                )
            })
            .collect())
    }

    fn document_frequency(&self, term: &str) -> Result<usize> {
        Ok(self.postings(term).map_or(0, Vec::len))
    }

    fn contains_term(&self, term: &str) -> Result<bool> {
        Ok(self.postings.contains_key(term))
    }
}
