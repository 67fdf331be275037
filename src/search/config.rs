pub const DEFAULT_FILE_MATCHES: usize = 5;
pub const DEFAULT_SENTENCE_MATCHES: usize = 1;

/// How many results each ranking stage keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Files shortlisted by TF-IDF before sentences are ranked.
    pub file_matches: usize,
    /// Sentences returned as the answer.
    pub sentence_matches: usize,
}

impl SearchConfig {
    pub const fn new(file_matches: usize, sentence_matches: usize) -> Self {
        Self {
            file_matches,
            sentence_matches,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_MATCHES, DEFAULT_SENTENCE_MATCHES)
    }
}
