use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub sentence: String,
    /// File the sentence was taken from.
    pub file: String,
    pub mwm: f64,
    pub qtd: f64,
}

impl SearchResult {
    pub const fn new(sentence: String, file: String, mwm: f64, qtd: f64) -> Self {
        Self {
            sentence,
            file,
            mwm,
            qtd,
        }
    }
}
