// tests/integration/output_formats.rs
use predicates::prelude::*;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{Workspace, word_freq};

fn sample(ws: &Workspace) -> std::path::PathBuf {
    ws.write_file("sample.txt", "the dog and the cat\nThe end, the END!\n")
}

#[test]
fn alphabetical_table() {
    let ws = Workspace::new();
    let file = sample(&ws);

    word_freq()
        .arg(&file)
        .args(["--sort", "alpha"])
        .assert()
        .success()
        .stdout(
            "Word  Frequency\n\
             and           1\n\
             cat           1\n\
             dog           1\n\
             end           2\n\
             the           4\n",
        );
}

#[test]
fn json_top_one() {
    let ws = Workspace::new();
    let file = sample(&ws);

    let assert = word_freq()
        .arg(&file)
        .args(["--format", "json", "--top", "1"])
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");

    let rows = json.as_array().expect("array of rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["word"], "the");
    assert_eq!(rows[0]["count"], 4);
}

#[test]
fn csv_frequency_order() {
    let ws = Workspace::new();
    let file = sample(&ws);

    word_freq()
        .arg(&file)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("word,frequency\nthe,4\nend,2\n"));
}
