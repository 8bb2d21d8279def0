//! Content checks for blog posts.
//!
//! Rules look at the placeholders in a post's content and, when known, the
//! set of images uploaded for it.

pub mod diagnostics;
pub mod rules;
pub mod runner;

pub use diagnostics::{Diagnostic, Edit, Fix, Location, Severity};
pub use rules::{Document, Rule, RuleRegistry};
pub use runner::LintRunner;

use crate::config::Config;

/// Lint `content` and return diagnostics sorted by position.
///
/// `images` is the post's content image list. Without it the rules that
/// compare placeholders against uploads are skipped.
pub fn lint(content: &str, images: Option<&[String]>, config: &Config) -> Vec<Diagnostic> {
    let document = Document::new(content, images);
    let runner = LintRunner::new(default_registry());
    runner.run(&document, config)
}

/// Apply every available fix to `content`.
///
/// Edits are applied back to front; an edit overlapping one already applied
/// is skipped.
pub fn apply_fixes(content: &str, diagnostics: &[Diagnostic]) -> String {
    let mut edits: Vec<&Edit> = diagnostics
        .iter()
        .filter_map(|d| d.fix.as_ref())
        .flat_map(|fix| fix.edits.iter())
        .collect();
    edits.sort_by_key(|edit| (edit.range.start, edit.range.end));

    let mut output = content.to_string();
    let mut limit = usize::MAX;
    for edit in edits.into_iter().rev() {
        if edit.range.end > limit || edit.range.end > output.len() {
            log::debug!("Skipping overlapping fix at {:?}", edit.range);
            continue;
        }
        output.replace_range(edit.range.clone(), &edit.replacement);
        limit = edit.range.start;
    }
    output
}

fn default_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register(Box::new(rules::missing_image::MissingImageRule));
    registry.register(Box::new(rules::unused_image::UnusedImageRule));
    registry.register(Box::new(
        rules::malformed_placeholder::UnterminatedPlaceholderRule,
    ));
    registry.register(Box::new(rules::malformed_placeholder::EmptyPlaceholderRule));
    registry
}
