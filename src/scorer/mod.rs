mod score_result;

pub use self::score_result::{ScoreResult, TermReport};
use crate::{error::Result, frequency::TermOccurrence};

/// Decimal places kept by every score.
pub const PRECISION: u32 = 6;

/// Rounds the exact binary value to `PRECISION` places. Scaling by `10^6`
/// first would round products that sit just below a half upwards.
pub fn round(value: f64) -> f64 {
    format!("{value:.prec$}", prec = PRECISION as usize)
        .parse()
        .unwrap_or(value)
}

/// `log10(raw_count + 1)`
#[allow(clippy::cast_precision_loss)]
pub fn normalized_tf(raw_count: usize) -> f64 {
    round((raw_count as f64 + 1.0).log10())
}

/// `1 + log10(N / k)`. Only defined for `k >= 1`.
#[allow(clippy::cast_precision_loss)]
pub fn idf(document_count: usize, document_frequency: usize) -> f64 {
    debug_assert!(document_frequency > 0, "idf of an absent term");

    round(1.0 + (document_count as f64 / document_frequency as f64).log10())
}

pub fn tf_idf(normalized_tf: f64, idf: f64) -> f64 {
    round(normalized_tf * idf)
}

/// Scores each occurrence of `term`. The caller has already established that
/// the term occurs in at least one document.
pub fn score(
    term: &str,
    document_count: usize,
    document_frequency: usize,
    occurrences: impl IntoIterator<Item = Result<TermOccurrence>>,
) -> Result<TermReport> {
    let idf = idf(document_count, document_frequency);

    let results = occurrences
        .into_iter()
        .map(|occurrence| {
            occurrence.map(|occurrence| {
                let normalized_tf = normalized_tf(occurrence.raw_count);

                ScoreResult::new(
                    occurrence.doc_id,
                    occurrence.raw_count,
                    normalized_tf,
                    tf_idf(normalized_tf, idf),
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TermReport {
        term: term.to_string(),
        results,
        document_frequency,
        idf,
    })
}
