//! CLI integration tests for safari-blog.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (render, lint, insert, admin commands offline)
//! - Stdin/stdout handling
//! - Exit codes
//! - File I/O operations

mod common;
mod insert;
mod lint;
mod render;
