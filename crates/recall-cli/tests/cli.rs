//! End-to-end tests for the `recall` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn recall() -> Command {
    Command::cargo_bin("recall").unwrap()
}

#[test]
fn resolve_outputs_json_with_date_and_phrase() {
    recall()
        .args([
            "resolve",
            "I went there last Tuesday",
            "--reference",
            "2024-03-15",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-12"))
        .stdout(predicate::str::contains("last Tuesday"))
        .stdout(predicate::str::contains("I went there"));
}

#[test]
fn resolve_without_match_reports_null_date() {
    recall()
        .args(["resolve", "nothing temporal here", "--reference", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("null"));
}

#[test]
fn strip_prints_cleaned_text_only() {
    recall()
        .args(["strip", "met Sarah 3 days ago", "--reference", "2024-03-15"])
        .assert()
        .success()
        .stdout("met Sarah\n");
}

#[test]
fn strip_reads_stdin() {
    recall()
        .args(["strip", "-", "--reference", "2024-03-15"])
        .write_stdin("call them tomorrow about the quote\n")
        .assert()
        .success()
        .stdout("call them about the quote\n");
}

#[test]
fn accepts_rfc3339_reference() {
    recall()
        .args(["strip", "we met yesterday", "--reference", "2024-03-15T10:30:00Z"])
        .assert()
        .success()
        .stdout("we met\n");
}

#[test]
fn invalid_reference_fails() {
    recall()
        .args(["resolve", "yesterday", "--reference", "not-a-date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid datetime"));
}
