//! Two-stage ranking: TF-IDF over files, then matching word measure with
//! query term density over the sentences of the best files.

pub mod files;
pub mod idf;
pub mod sentences;

pub use files::{rank_files, top_files, ScoredDocument};
pub use idf::{compute_idf, count_document_frequency};
pub use sentences::{rank_sentences, top_sentences, SentenceScore};
