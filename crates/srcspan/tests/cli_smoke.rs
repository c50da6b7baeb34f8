use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_displays_usage() {
    Command::cargo_bin("srcspan")
        .expect("binary exists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn missing_span_arguments_fail() {
    Command::cargo_bin("srcspan")
        .expect("binary exists")
        .arg("some-file.rs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--start-line"));
}
