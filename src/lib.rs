//! Answers natural-language questions from a directory of text files.
//!
//! Files are ranked against the query by TF-IDF, then the sentences of the
//! best files are ranked by matching word measure, with query term density
//! breaking ties.

pub mod corpus;
pub mod document;
pub mod error;
pub mod ranking;
pub mod search;
pub mod splitter;
pub mod tokenizer;

pub use error::{Error, Result};
