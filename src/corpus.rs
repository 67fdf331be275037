use std::{fs, path::Path};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{
    document::Corpus,
    error::{Error, Result},
};

const TEXT_EXTENSION: &str = "txt";

/// Reads every `.txt` file directly inside `dir`, keyed by file name.
///
/// # Errors
///
/// Fails when `dir` is not a directory, when a file cannot be read as UTF-8,
/// or when no text file is found.
pub fn load_corpus(dir: &Path) -> Result<Corpus> {
    if !dir.is_dir() {
        return Err(Error::CorpusNotFound(dir.to_path_buf()));
    }

    let mut corpus = Corpus::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| Error::Generic(format!("Failed to read corpus entry: {e}")))?;

        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|ext| ext.to_str()) != Some(TEXT_EXTENSION)
        {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let content = fs::read_to_string(path)?;

        debug!(file = %name, bytes = content.len(), "Loaded corpus file");
        corpus.insert(name, content);
    }

    if corpus.is_empty() {
        return Err(Error::EmptyCorpus(dir.to_path_buf()));
    }

    info!(dir = %dir.display(), files = corpus.len(), "Corpus loaded");
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_top_level_text_files_only() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("a.txt"), "The cat sat on the mat.").expect("write a.txt");
        fs::write(dir.path().join("b.txt"), "Dogs are loyal animals.").expect("write b.txt");
        fs::write(dir.path().join("notes.md"), "# not a corpus file").expect("write notes.md");
        fs::create_dir(dir.path().join("nested")).expect("create nested");
        fs::write(dir.path().join("nested/c.txt"), "Hidden.").expect("write nested/c.txt");

        let corpus = load_corpus(dir.path()).expect("Failed to load corpus");

        assert_eq!(corpus.keys().collect::<Vec<_>>(), vec!["a.txt", "b.txt"]);
        assert_eq!(corpus["a.txt"], "The cat sat on the mat.");
    }

    #[test]
    fn missing_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("missing");

        assert!(matches!(load_corpus(&missing), Err(Error::CorpusNotFound(path)) if path == missing));
    }

    #[test]
    fn file_instead_of_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = dir.path().join("a.txt");
        fs::write(&file, "text").expect("write a.txt");

        assert!(matches!(load_corpus(&file), Err(Error::CorpusNotFound(_))));
    }

    #[test]
    fn directory_without_text_files() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("data.csv"), "a,b").expect("write data.csv");

        assert!(matches!(load_corpus(dir.path()), Err(Error::EmptyCorpus(_))));
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0xfd]).expect("write bad.txt");

        assert!(matches!(load_corpus(dir.path()), Err(Error::IO(_))));
    }
}
