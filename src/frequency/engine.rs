use tracing::debug;

use super::{
    common::most_common, CommonTerms, DocIDs, FrequencySource, Occurrences, TermOccurrence,
};
use crate::{
    corpus::{Corpus, DocID, Document},
    error::Result,
    filter::FilterMode,
    tokenizer::Tokenizer,
};

/// Answers every query with a fresh pass over the corpus file.
pub struct FrequencyEngine {
    corpus: Corpus,
    tokenizer: Tokenizer,
    mode: FilterMode,
}

impl FrequencyEngine {
    pub const fn new(corpus: Corpus, tokenizer: Tokenizer, mode: FilterMode) -> Self {
        Self {
            corpus,
            tokenizer,
            mode,
        }
    }
}

impl FrequencySource for FrequencyEngine {
    fn document_count(&self) -> usize {
        self.corpus.document_count()
    }

    fn raw_count_per_document<'a>(&'a self, term: &'a str) -> Result<Occurrences<'a>> {
        debug!(term, mode = ?self.mode, "scanning corpus");

        let documents = self.corpus.tokenized_documents(&self.tokenizer, self.mode)?;

        Ok(Box::new(documents.filter_map(move |document| match document {
            Ok(document) => {
                let raw_count = document.count(term);
                (raw_count > 0).then(|| Ok(TermOccurrence::new(document.doc_id, raw_count)))
            }
            Err(e) => Some(Err(e)),
        })))
    }

    fn documents_containing<'a>(&'a self, term: &'a str) -> Result<DocIDs<'a>> {
        let documents = self.corpus.tokenized_documents(&self.tokenizer, self.mode)?;

        Ok(Box::new(documents.filter_map(move |document| match document {
            Ok(document) => document.contains(term).then_some(Ok(document.doc_id)),
            Err(e) => Some(Err(e)),
        })))
    }

    fn document(&self, doc_id: DocID) -> Result<Option<Document>> {
        self.corpus.document(doc_id)
    }

    fn most_common(&self, n: usize) -> Result<Vec<CommonTerms>> {
        self.corpus
            .tokenized_documents(&self.tokenizer, self.mode)?
            .map(|document| {
                document.map(|document| {
                    CommonTerms::new(document.doc_id, most_common(&document.tokens, n))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::TermCount;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn engine(lines: &str, mode: FilterMode) -> (FrequencyEngine, NamedTempFile) {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(lines.as_bytes())
            .expect("Failed to write corpus");

        let corpus = Corpus::open(file.path()).expect("Failed to open corpus");
        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");

        (FrequencyEngine::new(corpus, tokenizer, mode), file)
    }

    #[test]
    fn raw_counts_skip_documents_without_term() {
        let (engine, _file) = engine(
            "the cat sat\nthe dog ran\na cat ran cat\n",
            FilterMode::None,
        );

        let occurrences = engine
            .raw_count_per_document("cat")
            .expect("Failed to scan corpus")
            .collect::<Result<Vec<_>>>()
            .expect("Failed to read document");

        assert_eq!(
            occurrences,
            vec![TermOccurrence::new(1, 1), TermOccurrence::new(3, 2)]
        );
    }

    #[test]
    fn documents_containing_and_frequency() {
        let (engine, _file) = engine("the cat sat\nthe dog ran\na cat ran\n", FilterMode::None);

        let doc_ids = engine
            .documents_containing("cat")
            .expect("Failed to scan corpus")
            .collect::<Result<Vec<_>>>()
            .expect("Failed to read document");

        assert_eq!(doc_ids, vec![1, 3]);
        assert_eq!(engine.document_frequency("cat").expect("Failed to count"), 2);
        assert_eq!(engine.document_frequency("ran").expect("Failed to count"), 2);
        assert_eq!(engine.document_frequency("bird").expect("Failed to count"), 0);
    }

    #[test]
    fn contains_term() {
        let (engine, _file) = engine("the cat sat\nthe dog ran\n", FilterMode::None);

        assert!(engine.contains_term("dog").expect("Failed to scan corpus"));
        assert!(!engine.contains_term("bird").expect("Failed to scan corpus"));
    }

    #[test]
    fn match_is_exact() {
        let (engine, _file) = engine("The Cat sat\n", FilterMode::None);

        assert!(engine.contains_term("cat").expect("Failed to scan corpus"));
        assert!(!engine.contains_term("Cat").expect("Failed to scan corpus"));
        assert!(!engine.contains_term("ca").expect("Failed to scan corpus"));
    }

    #[test]
    fn hyphenated_term_is_found() {
        let (engine, _file) = engine("a well-known cat\n", FilterMode::Punctuation);

        assert!(engine.contains_term("well-known").expect("Failed to scan corpus"));
        assert!(!engine.contains_term("known").expect("Failed to scan corpus"));
    }

    #[test]
    fn filtered_terms_are_invisible() {
        let (engine, _file) = engine("the cat, sat\n", FilterMode::Both);

        assert!(!engine.contains_term("the").expect("Failed to scan corpus"));
        assert!(!engine.contains_term(",").expect("Failed to scan corpus"));
        assert!(engine.contains_term("cat").expect("Failed to scan corpus"));
    }

    #[test]
    fn most_common_per_document() {
        let (engine, _file) = engine("b a b\n\nc\n", FilterMode::None);

        assert_eq!(
            engine.most_common(1).expect("Failed to scan corpus"),
            vec![
                CommonTerms::new(1, vec![TermCount::new("b".to_string(), 2)]),
                CommonTerms::new(2, vec![]),
                CommonTerms::new(3, vec![TermCount::new("c".to_string(), 1)]),
            ]
        );
    }
}
