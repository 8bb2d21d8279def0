//! Insert subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn post_file(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("post.txt");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

#[test]
fn test_insert_image_prints_result() {
    let (_dir, path) = post_file("Day one. Day two.");

    cargo_bin_cmd!("safari-blog")
        .args(["insert", "image", "lion.webp", path.to_str().unwrap(), "--at", "9"])
        .assert()
        .success()
        .stdout("Day one. \n\n[IMAGE:lion.webp]\n\nDay two.")
        .stderr(predicate::str::contains("cursor: 30"));

    // Without --write the file is untouched
    assert_eq!(fs::read_to_string(&path).unwrap(), "Day one. Day two.");
}

#[test]
fn test_insert_bold_write() {
    let (_dir, path) = post_file("make this bold");

    cargo_bin_cmd!("safari-blog")
        .args(["insert", "bold", path.to_str().unwrap(), "--at", "10:14", "--write"])
        .assert()
        .success()
        .stderr(predicate::str::contains("cursor: 18"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "make this **bold**");
}

#[test]
fn test_insert_paragraph() {
    let (_dir, path) = post_file("ab");

    cargo_bin_cmd!("safari-blog")
        .args(["insert", "paragraph", path.to_str().unwrap(), "--at", "1"])
        .assert()
        .success()
        .stdout("a\n\nb")
        .stderr(predicate::str::contains("cursor: 3"));
}

#[test]
fn test_insert_out_of_bounds() {
    let (_dir, path) = post_file("abc");

    cargo_bin_cmd!("safari-blog")
        .args(["insert", "italic", path.to_str().unwrap(), "--at", "2:40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: position 40 is past the end"));
}

#[test]
fn test_insert_bad_offset() {
    let (_dir, path) = post_file("abc");

    cargo_bin_cmd!("safari-blog")
        .args(["insert", "underline", path.to_str().unwrap(), "--at", "one"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid offset 'one'"));
}
