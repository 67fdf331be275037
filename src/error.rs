use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("corpus directory not found: {}", .0.display())]
    CorpusNotFound(PathBuf),

    #[error("empty corpus: no .txt files in {}", .0.display())]
    EmptyCorpus(PathBuf),

    /// IDF is undefined over zero documents.
    #[error("cannot compute idf over an empty collection")]
    EmptyCollection,

    #[error("query has no searchable words")]
    EmptyQuery,

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
