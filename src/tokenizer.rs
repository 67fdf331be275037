use crate::{
    document::{Query, TokenSequence},
    error::{Error, Result},
};
use regex::Regex;
use std::{collections::HashSet, fs, path::Path};

/// NLTK's English stopword list.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Words dropped during tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords(HashSet<String>);

impl StopWords {
    pub fn english() -> Self {
        ENGLISH_STOP_WORDS.iter().copied().collect()
    }

    /// Reads one stopword per line. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

impl FromIterator<String> for StopWords {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for StopWords {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(String::from).collect())
    }
}

pub struct Tokenizer {
    stop_words: StopWords,
    punctuation: Regex,
}

impl Tokenizer {
    /// Tokenizer with the English stopword list.
    ///
    /// # Errors
    ///
    /// Fails only if the punctuation pattern does not compile.
    pub fn new() -> Result<Self> {
        Self::with_stop_words(StopWords::english())
    }

    /// # Errors
    ///
    /// Fails only if the punctuation pattern does not compile.
    pub fn with_stop_words(stop_words: StopWords) -> Result<Self> {
        Ok(Self {
            stop_words,
            punctuation: Regex::new(r"[[:punct:]\p{P}]")
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
        })
    }

    /// Strips punctuation, lowercases and drops stopwords, keeping order.
    pub fn tokenize(&self, text: &str) -> TokenSequence {
        let stripped = self.punctuation.replace_all(text, "").to_lowercase();

        stripped
            .split_whitespace()
            .filter(|word| !self.stop_words.contains(word))
            .collect()
    }

    pub fn query(&self, text: &str) -> Query {
        self.tokenize(text).into()
    }
}
