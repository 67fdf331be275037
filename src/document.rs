use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

pub type DocID = String;
pub type Word = String;
pub type IDF = f64;

/// Raw file contents keyed by file name.
pub type Corpus = BTreeMap<DocID, String>;

/// Token sequences keyed by document (a file or a single sentence).
pub type Collection = BTreeMap<DocID, TokenSequence>;

/// Normalized words of one unit of text, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenSequence(Vec<Word>);

impl TokenSequence {
    pub const fn new(words: Vec<Word>) -> Self {
        Self(words)
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|w| w == word)
    }

    /// Number of times `word` occurs, counting repeats.
    pub fn term_frequency(&self, word: &str) -> usize {
        self.0.iter().filter(|w| *w == word).count()
    }

    /// Set view of the sequence, used for presence tests.
    pub fn distinct(&self) -> HashSet<&str> {
        self.0.iter().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<Word>> for TokenSequence {
    fn from(words: Vec<Word>) -> Self {
        Self(words)
    }
}

impl<'a> FromIterator<&'a str> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(String::from).collect())
    }
}

/// Distinct query words. Query-side frequency carries no weight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query(BTreeSet<Word>);

impl Query {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<TokenSequence> for Query {
    fn from(tokens: TokenSequence) -> Self {
        Self(tokens.0.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for Query {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(String::from).collect())
    }
}

/// Inverse document frequency of every word seen in a collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdfTable(HashMap<Word, IDF>);

impl IdfTable {
    pub const fn new(values: HashMap<Word, IDF>) -> Self {
        Self(values)
    }

    /// `None` for words that never occurred in the collection.
    pub fn get(&self, word: &str) -> Option<IDF> {
        self.0.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
