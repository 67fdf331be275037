use serde::Serialize;
use std::cmp::Ordering;

use crate::document::{Collection, DocID, IdfTable, Query, TokenSequence};

/// Ranking key of one sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceScore {
    pub id: DocID,
    /// Matching word measure: summed idf of the distinct query words present.
    pub mwm: f64,
    /// Query term density: share of the sentence's words that are query words.
    pub qtd: f64,
}

impl SentenceScore {
    #[allow(clippy::cast_precision_loss)]
    pub fn new(id: DocID, query: &Query, tokens: &TokenSequence, idf: &IdfTable) -> Self {
        let mut mwm = 0.0;
        let mut matches = 0;

        for word in query.words() {
            let tf = tokens.term_frequency(word);
            if tf == 0 {
                continue;
            }
            mwm += idf.get(word).unwrap_or(0.0);
            matches += tf;
        }

        let qtd = if tokens.is_empty() {
            0.0
        } else {
            matches as f64 / tokens.len() as f64
        };

        Self { id, mwm, qtd }
    }

    /// Higher MWM wins; QTD only breaks exact MWM ties.
    fn rank(&self, other: &Self) -> Ordering {
        other
            .mwm
            .partial_cmp(&self.mwm)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.qtd.partial_cmp(&self.qtd).unwrap_or(Ordering::Equal))
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Every sentence with its score, best first.
pub fn rank_sentences(query: &Query, sentences: &Collection, idf: &IdfTable) -> Vec<SentenceScore> {
    let mut scored: Vec<SentenceScore> = sentences
        .iter()
        .map(|(id, tokens)| SentenceScore::new(id.clone(), query, tokens, idf))
        .collect();

    scored.sort_by(SentenceScore::rank);
    scored
}

pub fn top_sentences(
    query: &Query,
    sentences: &Collection,
    idf: &IdfTable,
    n: usize,
) -> Vec<SentenceScore> {
    let mut ranked = rank_sentences(query, sentences, idf);
    ranked.truncate(n);
    ranked
}
