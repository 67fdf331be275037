use std::collections::HashMap;

use crate::{
    document::{Collection, IdfTable, Word},
    error::{Error, Result},
};

/// Number of documents each word appears in. Repeats within one document
/// count once.
pub fn count_document_frequency(collection: &Collection) -> HashMap<Word, usize> {
    let mut document_frequency: HashMap<Word, usize> = HashMap::new();

    for tokens in collection.values() {
        for word in tokens.distinct() {
            *document_frequency.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    document_frequency
}

/// `ln(N / df)` for every word present in at least one document.
///
/// # Errors
///
/// Returns [`Error::EmptyCollection`] when the collection has no documents.
#[allow(clippy::cast_precision_loss)]
pub fn compute_idf(collection: &Collection) -> Result<IdfTable> {
    if collection.is_empty() {
        return Err(Error::EmptyCollection);
    }

    let num_docs = collection.len() as f64;

    let values = count_document_frequency(collection)
        .into_iter()
        .map(|(word, df)| (word, (num_docs / df as f64).ln()))
        .collect();

    Ok(IdfTable::new(values))
}
