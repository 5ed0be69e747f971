use std::fs::File;
use std::io::{BufRead, BufReader, Lines};

use super::document::{Document, TokenizedDocument};

use crate::{
    error::{Error, Result},
    filter::FilterMode,
    tokenizer::Tokenizer,
};

pub struct Documents {
    lines: Lines<BufReader<File>>,
    doc_id: usize,
}

impl Documents {
    pub(super) fn new(reader: BufReader<File>) -> Self {
        Self {
            lines: reader.lines(),
            doc_id: 0,
        }
    }
}

impl Iterator for Documents {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.doc_id += 1;

        let doc_id = self.doc_id;

        Some(
            line.map(|text| Document::new(doc_id, text))
                .map_err(|source| Error::ReadDocument { doc_id, source }),
        )
    }
}

pub struct TokenizedDocuments<'a> {
    documents: Documents,
    tokenizer: &'a Tokenizer,
    mode: FilterMode,
}

impl<'a> TokenizedDocuments<'a> {
    pub(super) const fn new(
        documents: Documents,
        tokenizer: &'a Tokenizer,
        mode: FilterMode,
    ) -> Self {
        Self {
            documents,
            tokenizer,
            mode,
        }
    }
}

impl Iterator for TokenizedDocuments<'_> {
    type Item = Result<TokenizedDocument>;

    fn next(&mut self) -> Option<Self::Item> {
        let document = self.documents.next()?;

        Some(document.map(|document| document.tokenize(self.tokenizer, self.mode)))
    }
}
