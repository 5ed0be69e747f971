use std::collections::HashMap;

use serde::Serialize;

use crate::corpus::DocID;

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

impl TermCount {
    pub const fn new(term: String, count: usize) -> Self {
        Self { term, count }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct CommonTerms {
    pub doc_id: DocID,
    pub terms: Vec<TermCount>,
}

impl CommonTerms {
    pub const fn new(doc_id: DocID, terms: Vec<TermCount>) -> Self {
        Self { doc_id, terms }
    }
}

/// Counts every distinct token and ranks by descending count. Equal counts
/// keep the order in which the terms first appear.
pub fn rank_terms(tokens: &[String]) -> Vec<TermCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<TermCount> = Vec::new();

    for token in tokens {
        if let Some(&position) = positions.get(token.as_str()) {
            ranked[position].count += 1;
        } else {
            positions.insert(token.as_str(), ranked.len());
            ranked.push(TermCount::new(token.clone(), 1));
        }
    }

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

pub fn most_common(tokens: &[String], n: usize) -> Vec<TermCount> {
    let mut ranked = rank_terms(tokens);
    ranked.truncate(n);
    ranked
}
