//! Inline emphasis: `**bold**`, `*italic*` and `__underline__`.
//!
//! Three flat passes run in a fixed order: bold, then italic, then
//! underline. Each pass only rewrites raw text. A span converted by an
//! earlier pass is sealed, so `**x*y*z**` becomes one bold span holding the
//! literal `x*y*z`. Spans never nest.
//!
//! Markers pair lazily from the left, matching the shortest span. Empty
//! spans (`****`) are allowed and produce an empty element.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Config;
use crate::fragments::{self, Segment, Theme, join_segments};

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static UNDERLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
    Underline,
}

impl Emphasis {
    /// Passes in the order they must run.
    pub const PASSES: [Emphasis; 3] = [Emphasis::Bold, Emphasis::Italic, Emphasis::Underline];

    /// Marker written on each side of the span.
    pub fn marker(self) -> &'static str {
        match self {
            Emphasis::Bold => "**",
            Emphasis::Italic => "*",
            Emphasis::Underline => "__",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Emphasis::Bold => &BOLD,
            Emphasis::Italic => &ITALIC,
            Emphasis::Underline => &UNDERLINE,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Emphasis::Bold => "strong",
            Emphasis::Italic => "em",
            Emphasis::Underline => "u",
        }
    }

    fn class(self, theme: &Theme) -> &'static str {
        match self {
            Emphasis::Bold => theme.strong,
            Emphasis::Italic => theme.em,
            Emphasis::Underline => theme.underline,
        }
    }
}

fn apply_pass<'a>(
    segments: Vec<Segment<'a>>,
    emphasis: Emphasis,
    config: &Config,
) -> Vec<Segment<'a>> {
    let theme = Theme::for_style(config.style);
    let pattern = emphasis.pattern();
    let mut out = Vec::with_capacity(segments.len());

    for segment in segments {
        let text = match segment {
            Segment::Text(text) => text,
            html => {
                out.push(html);
                continue;
            }
        };

        let mut pos = 0;
        for caps in pattern.captures_iter(text) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > pos {
                out.push(Segment::Text(&text[pos..whole.start()]));
            }
            out.push(Segment::Html(fragments::emphasis(
                emphasis.tag(),
                emphasis.class(theme),
                inner.as_str(),
                config,
            )));
            pos = whole.end();
        }
        if pos < text.len() {
            out.push(Segment::Text(&text[pos..]));
        }
    }

    out
}

/// Run all emphasis passes over already-substituted segments.
pub fn format_segments<'a>(segments: Vec<Segment<'a>>, config: &Config) -> Vec<Segment<'a>> {
    Emphasis::PASSES
        .iter()
        .fold(segments, |segments, &emphasis| apply_pass(segments, emphasis, config))
}

/// Apply emphasis to a plain string.
pub fn format_inline(text: &str, config: &Config) -> String {
    let segments = format_segments(vec![Segment::Text(text)], config);
    join_segments(&segments, config)
}

/// Wrap `text` in the markers for `emphasis`.
pub fn wrap(text: &str, emphasis: Emphasis) -> String {
    let marker = emphasis.marker();
    format!("{marker}{text}{marker}")
}
