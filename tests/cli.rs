//! Command-line behaviour of `questions`.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn questions() -> assert_cmd::Command {
    cargo_bin_cmd!("questions")
}

fn corpus() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("a.txt"), "The cat sat on the mat.").expect("write a.txt");
    fs::write(dir.path().join("b.txt"), "Dogs are loyal animals.").expect("write b.txt");
    dir
}

#[test]
fn answers_query_from_stdin() {
    let dir = corpus();

    questions()
        .arg(dir.path())
        .write_stdin("cat\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Query: "))
        .stdout(predicate::str::contains("The cat sat on the mat.\n"));
}

#[test]
fn answers_query_from_flag() {
    let dir = corpus();

    questions()
        .arg(dir.path())
        .args(["--query", "Are dogs loyal?"])
        .assert()
        .success()
        .stdout("Dogs are loyal animals.\n");
}

#[test]
fn json_output() {
    let dir = corpus();

    let output = questions()
        .arg(dir.path())
        .args(["--query", "cat", "--json"])
        .output()
        .expect("run questions");
    assert!(output.status.success());

    let results: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is json");
    assert_eq!(results[0]["sentence"], "The cat sat on the mat.");
    assert_eq!(results[0]["file"], "a.txt");
}

#[test]
fn prints_several_sentences() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("pets.txt"),
        "Cats purr.\nCats sleep all day. Fish swim.",
    )
    .expect("write pets.txt");

    questions()
        .arg(dir.path())
        .args(["--query", "cats", "--sentence-matches", "2"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Cats purr.")
                .and(predicate::str::contains("Cats sleep all day."))
                .and(predicate::str::contains("Fish").not()),
        );
}

#[test]
fn custom_stop_words() {
    let dir = corpus();
    let stop_words = dir.path().join("stop_words.list");
    fs::write(&stop_words, "cat\n").expect("write stop words");

    questions()
        .arg(dir.path())
        .args(["--query", "cat"])
        .arg("--stop-words")
        .arg(&stop_words)
        .assert()
        .failure()
        .stderr(predicate::str::contains("query has no searchable words"));
}

#[test]
fn missing_argument_prints_usage() {
    questions()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn too_many_arguments_prints_usage() {
    questions()
        .args(["one", "two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn zero_matches_is_rejected() {
    let dir = corpus();

    questions()
        .arg(dir.path())
        .args(["--file-matches", "0", "--query", "cat"])
        .assert()
        .failure();
}

#[test]
fn missing_corpus_directory() {
    let dir = tempfile::tempdir().expect("tempdir");

    questions()
        .arg(dir.path().join("missing"))
        .args(["--query", "cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corpus directory not found"));
}

#[test]
fn empty_corpus_directory() {
    let dir = tempfile::tempdir().expect("tempdir");

    questions()
        .arg(dir.path())
        .args(["--query", "cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty corpus"));
}
