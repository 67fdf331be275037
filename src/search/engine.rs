use crate::{
    document::{Collection, Corpus, DocID, IdfTable, Query},
    error::{Error, Result},
    ranking::{compute_idf, top_files, top_sentences, ScoredDocument},
    splitter::split_into_sentences,
    tokenizer::Tokenizer,
};
use std::collections::HashMap;
use tracing::{debug, info};

use super::{config::SearchConfig, search_result::SearchResult};

pub struct SearchEngine {
    corpus: Corpus,
    files: Collection,
    file_idf: IdfTable,
    tokenizer: Tokenizer,
    config: SearchConfig,
}

impl SearchEngine {
    /// Tokenizes every file and computes the file-level idf table.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyCollection`] when `corpus` is empty.
    pub fn new(corpus: Corpus, tokenizer: Tokenizer, config: SearchConfig) -> Result<Self> {
        let files: Collection = corpus
            .iter()
            .map(|(name, text)| (name.clone(), tokenizer.tokenize(text)))
            .collect();

        let file_idf = compute_idf(&files)?;

        info!(
            files = files.len(),
            vocabulary = file_idf.len(),
            "Search engine ready"
        );

        Ok(Self {
            corpus,
            files,
            file_idf,
            tokenizer,
            config,
        })
    }

    /// The files that best match `query` by TF-IDF.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyQuery`] when the query has no searchable words.
    pub fn top_files(&self, query: &str) -> Result<Vec<ScoredDocument>> {
        let query = self.parse_query(query)?;
        Ok(top_files(
            &query,
            &self.files,
            &self.file_idf,
            self.config.file_matches,
        ))
    }

    /// The sentences that best answer `query`, taken from the best files.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyQuery`] when the query has no searchable words.
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let query = self.parse_query(query)?;

        let files = top_files(
            &query,
            &self.files,
            &self.file_idf,
            self.config.file_matches,
        );
        debug!(files = ?files.iter().map(|f| f.id.as_str()).collect::<Vec<_>>(), "Shortlisted files");

        let (sentences, sources) = self.sentences_of(&files);
        if sentences.is_empty() {
            debug!("Shortlisted files have no searchable sentences");
            return Ok(Vec::new());
        }
        debug!(sentences = sentences.len(), "Ranking sentences");

        let sentence_idf = compute_idf(&sentences)?;

        top_sentences(
            &query,
            &sentences,
            &sentence_idf,
            self.config.sentence_matches,
        )
        .into_iter()
        .map(|score| {
            let file = sources.get(&score.id).cloned().ok_or_else(|| {
                Error::Generic(format!("No source file for sentence: {}", score.id))
            })?;
            Ok(SearchResult::new(score.id, file, score.mwm, score.qtd))
        })
        .collect()
    }

    fn parse_query(&self, query: &str) -> Result<Query> {
        let query = self.tokenizer.query(query);
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }
        Ok(query)
    }

    /// Tokenized sentences of `files`, keyed by sentence text, along with the
    /// best-ranked file each sentence came from. Sentences without tokens are
    /// dropped.
    fn sentences_of(&self, files: &[ScoredDocument]) -> (Collection, HashMap<DocID, DocID>) {
        let mut sentences = Collection::new();
        let mut sources = HashMap::new();

        for file in files {
            let Some(text) = self.corpus.get(&file.id) else {
                continue;
            };

            for sentence in split_into_sentences(text) {
                let tokens = self.tokenizer.tokenize(&sentence);
                if tokens.is_empty() {
                    continue;
                }
                sources
                    .entry(sentence.clone())
                    .or_insert_with(|| file.id.clone());
                sentences.insert(sentence, tokens);
            }
        }

        (sentences, sources)
    }
}
