use crate::config::Config;
use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::{Document, Rule};

/// Placeholders naming an image that was never uploaded for the post.
pub struct MissingImageRule;

impl Rule for MissingImageRule {
    fn name(&self) -> &str {
        "missing-image"
    }

    fn check(&self, document: &Document<'_>, _config: &Config) -> Vec<Diagnostic> {
        let Some(images) = document.images else {
            return Vec::new();
        };

        document
            .placeholders
            .iter()
            .filter(|p| !images.iter().any(|name| name == p.name))
            .map(|p| {
                Diagnostic::warning(
                    Location::from_range(p.range(), document.input),
                    "missing-image",
                    format!("Image '{}' is not among the post's uploaded images", p.name),
                )
            })
            .collect()
    }
}
