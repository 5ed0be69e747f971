use std::io::Write;

use serde::Serialize;

use crate::{
    analyzer::{DocumentLookup, WordLookup},
    error::Result,
    frequency::CommonTerms,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders lookup outcomes, either as the plain line format or one JSON
/// document per lookup.
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    pub const fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn word(&mut self, lookup: &WordLookup) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(lookup);
        }

        match lookup {
            WordLookup::Found(report) => {
                writeln!(self.out, "WORD: '{}'", report.term)?;
                for result in &report.results {
                    writeln!(
                        self.out,
                        "DOC#: {} ~ TF RAW COUNT: {} ~ TF LOG NORMALIZATION: {:?} ~ TF-IDF: {:?}",
                        result.doc_id, result.raw_count, result.normalized_tf, result.tf_idf
                    )?;
                }
                writeln!(
                    self.out,
                    "DOCUMENT FREQUENCY: {} ~ INVERSE DOCUMENT FREQUENCY: {:?}",
                    report.document_frequency, report.idf
                )?;
                writeln!(self.out, "WORD: '{}'", report.term)?;
            }
            WordLookup::NotFound { term } => {
                writeln!(self.out, "'{term}' NOT FOUND, TRY AGAIN.")?;
            }
        }

        Ok(())
    }

    pub fn document(&mut self, lookup: &DocumentLookup) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(lookup);
        }

        match lookup {
            DocumentLookup::Found(document) => {
                writeln!(self.out, "DOC#: {}", document.doc_id)?;
                writeln!(self.out, "{}", document.text)?;
            }
            DocumentLookup::NotFound { .. } => {
                writeln!(self.out, "DOC NOT FOUND, TRY AGAIN.")?;
            }
        }

        Ok(())
    }

    pub fn common(&mut self, common_terms: &[CommonTerms]) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(&common_terms);
        }

        for document in common_terms {
            let terms = document
                .terms
                .iter()
                .map(|term_count| format!("{} ({})", term_count.term, term_count.count))
                .collect::<Vec<_>>()
                .join(", ");

            writeln!(self.out, "DOC#: {} ~ MOST COMMON: {terms}", document.doc_id)?;
        }

        Ok(())
    }

    fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;

        Ok(())
    }
}
