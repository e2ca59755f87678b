// tests/integration/end_to_end.rs
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{Workspace, word_freq};

#[test]
fn no_arguments_prints_usage_and_fails() {
    word_freq()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_is_a_failure_exit() {
    word_freq()
        .arg("--help")
        .assert()
        .failure()
        .stdout(predicate::str::contains("word_freq"))
        .stdout(predicate::str::contains("--sort"));
}

#[test]
fn version_succeeds() {
    word_freq()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn counts_across_files_case_insensitively() {
    let ws = Workspace::new();
    let a = ws.write_file("a.txt", "Go Go go GO\n");
    let b = ws.write_file("b.txt", "a cat sat on the go\n");

    let assert = word_freq().arg(&a).arg(&b).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines[0].starts_with("Word"));
    assert!(lines[0].ends_with("Frequency"));
    // highest count first
    assert!(lines[1].starts_with("go "));
    assert!(lines[1].ends_with('5'));
    assert!(!lines.iter().any(|l| l.starts_with("a ")));
    assert_eq!(lines.len(), 1 + 5);
}

#[test]
fn missing_file_is_logged_and_run_still_succeeds() {
    let ws = Workspace::new();
    let present = ws.write_file("present.txt", "hello hello world");
    let missing = ws.path().join("absent.txt");

    word_freq()
        .arg(&present)
        .arg(&missing)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello,2"))
        .stdout(predicate::str::contains("world,1"))
        .stderr(predicate::str::contains("absent.txt"))
        .stderr(predicate::str::contains("1 of 2 files could not be fully counted"));
}

#[test]
fn min_length_filters_short_words() {
    let ws = Workspace::new();
    let file = ws.write_file("short.txt", "an ant ants");

    word_freq()
        .arg(&file)
        .args(["--min-length", "3", "--format", "csv", "--sort", "alpha"])
        .assert()
        .success()
        .stdout("word,frequency\nant,1\nants,1\n");
}

#[test]
fn zero_min_length_is_a_usage_error() {
    let ws = Workspace::new();
    let file = ws.write_file("any.txt", "words");

    word_freq()
        .arg(&file)
        .args(["--min-length", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}
