mod document;
mod iterators;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    error::{Error, Result},
    filter::FilterMode,
    tokenizer::Tokenizer,
};

pub use self::{
    document::{DocID, Document, TokenizedDocument},
    iterators::{Documents, TokenizedDocuments},
};

/// A line-per-document text file. The document count is taken once when the
/// corpus is opened; every pass over the documents re-reads the file.
#[derive(Debug, Clone)]
pub struct Corpus {
    path: PathBuf,
    document_count: usize,
}

impl Corpus {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let mut document_count = 0;
        for line in open_reader(&path)?.lines() {
            line.map_err(|source| Error::ReadDocument {
                doc_id: document_count + 1,
                source,
            })?;
            document_count += 1;
        }

        debug!(path = %path.display(), document_count, "opened corpus");

        Ok(Self {
            path,
            document_count,
        })
    }

    pub const fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn documents(&self) -> Result<Documents> {
        Ok(Documents::new(open_reader(&self.path)?))
    }

    pub fn tokenized_documents<'a>(
        &self,
        tokenizer: &'a Tokenizer,
        mode: FilterMode,
    ) -> Result<TokenizedDocuments<'a>> {
        Ok(TokenizedDocuments::new(self.documents()?, tokenizer, mode))
    }

    /// Fetches one line by its 1-based index.
    pub fn document(&self, doc_id: DocID) -> Result<Option<Document>> {
        if doc_id == 0 || doc_id > self.document_count {
            return Ok(None);
        }

        self.documents()?.nth(doc_id - 1).transpose()
    }
}

fn open_reader(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| Error::OpenCorpus {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn corpus_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents).expect("Failed to write corpus");
        file
    }

    #[test]
    fn counts_lines() {
        let file = corpus_file(b"the cat sat\nthe dog ran\na cat ran\n");
        let corpus = Corpus::open(file.path()).expect("Failed to open corpus");

        assert_eq!(corpus.document_count(), 3);
    }

    #[test]
    fn last_line_without_newline_counts() {
        let file = corpus_file(b"one\n\nthree");
        let corpus = Corpus::open(file.path()).expect("Failed to open corpus");

        assert_eq!(corpus.document_count(), 3);
    }

    #[test]
    fn documents_are_one_based_and_restartable() {
        let file = corpus_file(b"the cat sat\nthe dog ran\na cat ran\n");
        let corpus = Corpus::open(file.path()).expect("Failed to open corpus");

        for _ in 0..2 {
            let documents = corpus
                .documents()
                .expect("Failed to read documents")
                .collect::<Result<Vec<_>>>()
                .expect("Failed to read line");

            assert_eq!(
                documents,
                vec![
                    Document::new(1, "the cat sat".to_string()),
                    Document::new(2, "the dog ran".to_string()),
                    Document::new(3, "a cat ran".to_string()),
                ]
            );
        }
    }

    #[test]
    fn tokenized_documents_apply_filter() {
        let file = corpus_file(b"The Cat, sat\n");
        let corpus = Corpus::open(file.path()).expect("Failed to open corpus");
        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");

        let documents = corpus
            .tokenized_documents(&tokenizer, FilterMode::Both)
            .expect("Failed to read documents")
            .collect::<Result<Vec<_>>>()
            .expect("Failed to read line");

        assert_eq!(
            documents,
            vec![TokenizedDocument::new(
                1,
                vec!["cat".to_string(), "sat".to_string()]
            )]
        );
    }

    #[test]
    fn document_lookup() {
        let file = corpus_file(b"the cat sat\nthe dog ran\na cat ran\n");
        let corpus = Corpus::open(file.path()).expect("Failed to open corpus");

        assert_eq!(
            corpus.document(2).expect("Failed to read document"),
            Some(Document::new(2, "the dog ran".to_string()))
        );
        assert_eq!(corpus.document(0).expect("Failed to read document"), None);
        assert_eq!(corpus.document(99).expect("Failed to read document"), None);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        assert!(matches!(
            Corpus::open(dir.path().join("missing.txt")),
            Err(Error::OpenCorpus { .. })
        ));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let file = corpus_file(b"fine\n\xff\xfe broken\n");

        assert!(matches!(
            Corpus::open(file.path()),
            Err(Error::ReadDocument { doc_id: 2, .. })
        ));
    }
}
