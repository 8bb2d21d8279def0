//! Render subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_stdin() {
    cargo_bin_cmd!("safari-blog")
        .args(["render", "--style", "preview"])
        .write_stdin("Hello **world**")
        .assert()
        .success()
        .stdout("<p class=\"mb-4\">Hello <strong>world</strong></p>\n");
}

#[test]
fn test_render_file_with_image() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("post.txt");
    fs::write(&test_file, "Intro\n\n[IMAGE:lion.webp]\n\nOutro").unwrap();

    cargo_bin_cmd!("safari-blog")
        .args(["render", test_file.to_str().unwrap()])
        .env("SAFARI_BLOG_API", "https://api.example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "src=\"https://api.example.com/api/uploads/blog-images/lion.webp\"",
        ))
        .stdout(predicate::str::contains("<br />"));
}

#[test]
fn test_render_restricts_images() {
    cargo_bin_cmd!("safari-blog")
        .args(["render", "--image", "lion.webp"])
        .write_stdin("[IMAGE:zebra.webp]")
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing image: zebra.webp"))
        .stdout(predicate::str::contains("<img").not());
}

#[test]
fn test_render_uses_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".safari-blog.toml"),
        "missing_images = \"literal\"\nstyle = \"preview\"\n",
    )
    .unwrap();
    let test_file = temp_dir.path().join("post.txt");
    fs::write(&test_file, "see [IMAGE:gone.png]").unwrap();

    cargo_bin_cmd!("safari-blog")
        .args(["render", "--image", "other.png", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<div>see [IMAGE:gone.png]</div>\n");
}

#[test]
fn test_render_post_json() {
    let post = r#"{
        "id": 1,
        "title": "Into <the> Mara",
        "content": "Day one\n[IMAGE:lion.webp]",
        "cover_image": "cover.jpg",
        "content_images": ["lion.webp"],
        "created_at": "2026-10-19T08:30:00Z"
    }"#;

    cargo_bin_cmd!("safari-blog")
        .args(["render", "--post"])
        .write_stdin(post)
        .assert()
        .success()
        .stdout(predicate::str::contains("Into &lt;the&gt; Mara</h1>"))
        .stdout(predicate::str::contains("October 19, 2026"))
        .stdout(predicate::str::contains("/api/uploads/blog-images/cover.jpg"));
}

#[test]
fn test_render_post_invalid_json() {
    cargo_bin_cmd!("safari-blog")
        .args(["render", "--post"])
        .write_stdin("{ not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid post JSON"));
}

#[test]
fn test_render_empty_input() {
    cargo_bin_cmd!("safari-blog")
        .arg("render")
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}
