//! Integration tests for the triplets CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, contents: &[u8]) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_prints_ranked_triplets() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "abc.txt", b"abcabcabc");

    let mut cmd = Command::cargo_bin("triplets").unwrap();
    cmd.arg(&input).arg("--top").arg("3").arg("-p").arg("2");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("abc - 3\nbca - 2\ncab - 2\n"))
        .stdout(predicate::str::contains("Elapsed:"));
}

#[test]
fn test_letters_only() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "abc.txt", b"Abc, ABC; abc");

    let mut cmd = Command::cargo_bin("triplets").unwrap();
    cmd.arg(&input).arg("-n").arg("1").arg("--letters-only");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("abc\nElapsed:"));
}

#[test]
fn test_short_input_prints_no_triplets() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "hi.txt", b"Hi!");

    let mut cmd = Command::cargo_bin("triplets").unwrap();
    cmd.arg(&input);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Elapsed:"));
}

#[test]
fn test_invalid_utf8_is_decoded_lossily() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "latin1.txt", b"aaa\xff\xfeaaa");

    let mut cmd = Command::cargo_bin("triplets").unwrap();
    cmd.arg(&input).arg("-n").arg("1");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("aaa - 4\n"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");

    let mut cmd = Command::cargo_bin("triplets").unwrap();
    cmd.arg(&missing);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot read input file"))
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn test_zero_partitions_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "abc.txt", b"abcabc");

    let mut cmd = Command::cargo_bin("triplets").unwrap();
    cmd.arg(&input).arg("--partitions").arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("partition count must be at least 1"));
}

#[test]
fn test_negative_top_rejected_by_parser() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "abc.txt", b"abcabc");

    let mut cmd = Command::cargo_bin("triplets").unwrap();
    cmd.arg(&input).arg("--top=-1");

    cmd.assert().failure();
}
