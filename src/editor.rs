//! Text edits at a cursor or selection.
//!
//! Positions are byte offsets into the content. Every operation returns the
//! new text together with where the cursor ends up, so the same helpers
//! serve a text widget, a CLI or a test.

use std::ops::Range;

use thiserror::Error;

use crate::inline::{Emphasis, wrap};
use crate::placeholder::placeholder_for;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("position {position} is past the end of the text ({len} bytes)")]
    OutOfBounds { position: usize, len: usize },
    #[error("position {0} is not on a character boundary")]
    NotCharBoundary(usize),
}

/// A selection in the content. `start == end` is a plain cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Build a selection, swapping the ends if given backwards.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn caret(position: usize) -> Self {
        Self::new(position, position)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    fn check(&self, text: &str) -> Result<(), EditError> {
        for position in [self.start, self.end] {
            if position > text.len() {
                return Err(EditError::OutOfBounds {
                    position,
                    len: text.len(),
                });
            }
            if !text.is_char_boundary(position) {
                return Err(EditError::NotCharBoundary(position));
            }
        }
        Ok(())
    }
}

/// Result of an edit: the new text and the cursor after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edited {
    pub text: String,
    pub cursor: usize,
}

/// Replace the selection with `insertion`; the cursor lands right after it.
pub fn replace_selection(
    text: &str,
    selection: Selection,
    insertion: &str,
) -> Result<Edited, EditError> {
    selection.check(text)?;

    let mut out = String::with_capacity(text.len() + insertion.len());
    out.push_str(&text[..selection.start]);
    out.push_str(insertion);
    out.push_str(&text[selection.end..]);

    Ok(Edited {
        text: out,
        cursor: selection.start + insertion.len(),
    })
}

/// Insert `insertion` at a cursor position.
pub fn insert_at(text: &str, position: usize, insertion: &str) -> Result<Edited, EditError> {
    replace_selection(text, Selection::caret(position), insertion)
}

/// Place an image placeholder on its own paragraph.
pub fn insert_image_placeholder(
    text: &str,
    selection: Selection,
    name: &str,
) -> Result<Edited, EditError> {
    let insertion = format!("\n\n{}\n\n", placeholder_for(name));
    replace_selection(text, selection, &insertion)
}

/// Start a new paragraph at the cursor.
pub fn insert_paragraph_break(text: &str, selection: Selection) -> Result<Edited, EditError> {
    replace_selection(text, selection, "\n\n")
}

/// Wrap the selected text in emphasis markers.
///
/// An empty selection inserts an empty pair of markers.
pub fn wrap_selection(
    text: &str,
    selection: Selection,
    emphasis: Emphasis,
) -> Result<Edited, EditError> {
    selection.check(text)?;
    let formatted = wrap(&text[selection.range()], emphasis);
    replace_selection(text, selection, &formatted)
}
