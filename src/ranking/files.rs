use serde::Serialize;
use std::cmp::Ordering;

use crate::document::{Collection, DocID, IdfTable, Query, TokenSequence};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub id: DocID,
    pub score: f64,
}

/// Sum of `tf * idf` over the query words present in `tokens`.
#[allow(clippy::cast_precision_loss)]
pub fn tf_idf(query: &Query, tokens: &TokenSequence, idf: &IdfTable) -> f64 {
    query
        .words()
        .filter_map(|word| {
            let tf = tokens.term_frequency(word);
            if tf == 0 {
                return None;
            }
            idf.get(word).map(|idf| tf as f64 * idf)
        })
        .sum::<f64>()
}

/// Every file with its TF-IDF score, best first.
///
/// Equal scores are ordered by file name so the result never depends on map
/// iteration order.
pub fn rank_files(query: &Query, files: &Collection, idf: &IdfTable) -> Vec<ScoredDocument> {
    let mut scored: Vec<ScoredDocument> = files
        .iter()
        .map(|(id, tokens)| ScoredDocument {
            id: id.clone(),
            score: tf_idf(query, tokens, idf),
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    scored
}

/// The `n` best files for `query`, or all of them when there are fewer.
pub fn top_files(query: &Query, files: &Collection, idf: &IdfTable, n: usize) -> Vec<ScoredDocument> {
    let mut ranked = rank_files(query, files, idf);
    ranked.truncate(n);
    ranked
}
