//! Scanning for image placeholders (`[IMAGE:filename]`)
//!
//! Blog content marks where uploaded images go with a literal token.
//! Syntax: `[IMAGE:` followed by one or more characters that are not `]`,
//! followed by `]`.
//!
//! Rules:
//! - Case-sensitive: `[image:x]` is plain text
//! - No escaping mechanism; the first `]` closes the token
//! - An unterminated `[IMAGE:` never matches and stays literal
//! - A placeholder never spans a line break
//! - The name may not be empty (`[IMAGE:]` is plain text)

use std::ops::Range;

pub const PLACEHOLDER_OPEN: &str = "[IMAGE:";
pub const PLACEHOLDER_CLOSE: char = ']';

/// A single placeholder occurrence in a content string.
///
/// Offsets are byte offsets into the scanned string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// The full token, e.g. `[IMAGE:sunset.webp]`
    pub token: &'a str,
    /// The enclosed image name, e.g. `sunset.webp`
    pub name: &'a str,
    /// Byte offset of the opening `[`
    pub start: usize,
}

impl<'a> Placeholder<'a> {
    /// Byte offset one past the closing `]`.
    pub fn end(&self) -> usize {
        self.start + self.token.len()
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Format a placeholder token for an image name.
pub fn placeholder_for(name: &str) -> String {
    format!("{PLACEHOLDER_OPEN}{name}{PLACEHOLDER_CLOSE}")
}

/// Try to parse a placeholder at the start of `text`.
/// Returns: (total_len, name)
pub fn try_parse_placeholder(text: &str) -> Option<(usize, &str)> {
    let rest = text.strip_prefix(PLACEHOLDER_OPEN)?;
    let close = rest.find([PLACEHOLDER_CLOSE, '\n'])?;

    if close == 0 || rest.as_bytes()[close] == b'\n' {
        return None;
    }

    let name = &rest[..close];
    Some((PLACEHOLDER_OPEN.len() + close + 1, name))
}

/// Find every placeholder in `content`, left to right.
pub fn scan_placeholders(content: &str) -> Vec<Placeholder<'_>> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(rel) = content[pos..].find(PLACEHOLDER_OPEN) {
        let start = pos + rel;
        match try_parse_placeholder(&content[start..]) {
            Some((len, name)) => {
                found.push(Placeholder {
                    token: &content[start..start + len],
                    name,
                    start,
                });
                pos = start + len;
            }
            None => {
                // Skip just the `[` so a later opener inside the name can still match
                pos = start + 1;
            }
        }
    }

    log::trace!("Scanned {} image placeholder(s)", found.len());
    found
}
