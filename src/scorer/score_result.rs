use serde::Serialize;

use crate::corpus::DocID;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub doc_id: DocID,
    pub raw_count: usize,
    pub normalized_tf: f64,
    pub tf_idf: f64,
}

impl ScoreResult {
    pub const fn new(doc_id: DocID, raw_count: usize, normalized_tf: f64, tf_idf: f64) -> Self {
        Self {
            doc_id,
            raw_count,
            normalized_tf,
            tf_idf,
        }
    }
}

/// Scores for every document containing `term`, plus the corpus-level figures
/// shared by all of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermReport {
    pub term: String,
    pub results: Vec<ScoreResult>,
    pub document_frequency: usize,
    pub idf: f64,
}
