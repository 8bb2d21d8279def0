//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("safari-blog")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("safari-blog renders blog content"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("safari-blog")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("safari-blog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("safari-blog")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_render_help() {
    cargo_bin_cmd!("safari-blog")
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Render blog content"));
}

#[test]
fn test_lint_help_lists_rules() {
    cargo_bin_cmd!("safari-blog")
        .args(["lint", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unterminated-placeholder"));
}

#[test]
fn test_missing_input_file() {
    cargo_bin_cmd!("safari-blog")
        .args(["render", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_invalid_explicit_config() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    std::fs::write(&config, "group_threshold = \"far\"").unwrap();

    cargo_bin_cmd!("safari-blog")
        .args(["--config", config.to_str().unwrap(), "render"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.toml"));
}
