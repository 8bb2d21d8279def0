//! Openers (`[IMAGE:`) that never became a placeholder.
//!
//! The renderer leaves these as literal text, which is rarely what the
//! author meant.

use std::ops::Range;

use crate::config::Config;
use crate::linter::diagnostics::{Diagnostic, Edit, Fix, Location};
use crate::linter::rules::{Document, Rule};
use crate::placeholder::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Malformed {
    /// `[IMAGE:]`
    Empty,
    /// No `]` before the end of the line
    Unterminated,
}

/// Byte offsets of openers outside any well-formed placeholder, with what is
/// wrong with each.
fn malformed_openers(document: &Document<'_>) -> Vec<(usize, Malformed)> {
    let input = document.input;
    let inside = |pos: usize| document.placeholders.iter().any(|p| p.range().contains(&pos));

    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(rel) = input[pos..].find(PLACEHOLDER_OPEN) {
        let start = pos + rel;
        pos = start + 1;
        if inside(start) {
            continue;
        }

        let rest = &input[start + PLACEHOLDER_OPEN.len()..];
        if rest.starts_with(PLACEHOLDER_CLOSE) {
            found.push((start, Malformed::Empty));
        } else {
            found.push((start, Malformed::Unterminated));
            // Every later opener on this line is unterminated too
            pos = line_end(input, start);
        }
    }
    found
}

fn line_end(input: &str, from: usize) -> usize {
    input[from..].find('\n').map_or(input.len(), |i| from + i)
}

pub struct UnterminatedPlaceholderRule;

impl Rule for UnterminatedPlaceholderRule {
    fn name(&self) -> &str {
        "unterminated-placeholder"
    }

    fn check(&self, document: &Document<'_>, _config: &Config) -> Vec<Diagnostic> {
        malformed_openers(document)
            .into_iter()
            .filter(|(_, kind)| *kind == Malformed::Unterminated)
            .map(|(start, _)| {
                let end = line_end(document.input, start);
                Diagnostic::warning(
                    Location::from_range(start..end, document.input),
                    "unterminated-placeholder",
                    "Image placeholder is missing its closing ']'",
                )
                .with_fix(Fix {
                    message: "Close the placeholder at the end of the line".to_string(),
                    edits: vec![Edit {
                        range: end..end,
                        replacement: PLACEHOLDER_CLOSE.to_string(),
                    }],
                })
            })
            .collect()
    }
}

pub struct EmptyPlaceholderRule;

impl Rule for EmptyPlaceholderRule {
    fn name(&self) -> &str {
        "empty-placeholder"
    }

    fn check(&self, document: &Document<'_>, _config: &Config) -> Vec<Diagnostic> {
        malformed_openers(document)
            .into_iter()
            .filter(|(_, kind)| *kind == Malformed::Empty)
            .map(|(start, _)| {
                let range: Range<usize> = start..start + PLACEHOLDER_OPEN.len() + 1;
                Diagnostic::warning(
                    Location::from_range(range.clone(), document.input),
                    "empty-placeholder",
                    "Image placeholder has no image name",
                )
                .with_fix(Fix {
                    message: "Remove the empty placeholder".to_string(),
                    edits: vec![Edit {
                        range,
                        replacement: String::new(),
                    }],
                })
            })
            .collect()
    }
}
