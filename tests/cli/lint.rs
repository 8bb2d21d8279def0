//! Lint subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_lint_clean_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("post.txt");
    fs::write(&test_file, "Intro\n\n[IMAGE:a.webp]\n").unwrap();

    cargo_bin_cmd!("safari-blog")
        .args(["lint", "--image", "a.webp", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_lint_with_violations() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("post.txt");
    fs::write(&test_file, "Intro\n[IMAGE:b.webp]\n").unwrap();

    cargo_bin_cmd!("safari-blog")
        .args(["lint", "--image", "a.webp", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("missing-image"))
        .stdout(predicate::str::contains("unused-image"))
        .stdout(predicate::str::contains("post.txt:2:1"))
        .stdout(predicate::str::contains("Found 2 issue(s)"));
}

#[test]
fn test_lint_check_mode_clean() {
    cargo_bin_cmd!("safari-blog")
        .args(["lint", "--check"])
        .write_stdin("no placeholders at all")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_lint_check_mode_violations() {
    cargo_bin_cmd!("safari-blog")
        .args(["lint", "--check"])
        .write_stdin("broken [IMAGE:lion.webp\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("unterminated-placeholder"));
}

#[test]
fn test_lint_fix_mode() {
    cargo_bin_cmd!("safari-blog")
        .args(["lint", "--fix"])
        .write_stdin("a [IMAGE:lion.webp\nb [IMAGE:] c\n")
        .assert()
        .success()
        .stdout("a [IMAGE:lion.webp]\nb  c\n");
}

#[test]
fn test_lint_fix_check_prints_diff() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("post.txt");
    fs::write(&test_file, "a [IMAGE:lion.webp\n").unwrap();

    cargo_bin_cmd!("safari-blog")
        .args(["lint", "--fix", "--check", test_file.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Diff in"))
        .stdout(predicate::str::contains("+a [IMAGE:lion.webp]"));

    // Check mode never touches the file
    assert_eq!(fs::read_to_string(&test_file).unwrap(), "a [IMAGE:lion.webp\n");
}
