use crate::config::Config;
use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::{Document, Rule};

/// Uploaded images that no placeholder refers to.
pub struct UnusedImageRule;

impl Rule for UnusedImageRule {
    fn name(&self) -> &str {
        "unused-image"
    }

    fn check(&self, document: &Document<'_>, _config: &Config) -> Vec<Diagnostic> {
        let Some(images) = document.images else {
            return Vec::new();
        };

        images
            .iter()
            .filter(|name| !document.placeholders.iter().any(|p| p.name == name.as_str()))
            .map(|name| {
                // Not tied to any text; point at the start of the document
                Diagnostic::info(
                    Location::from_range(0..0, document.input),
                    "unused-image",
                    format!("Uploaded image '{name}' is never placed in the content"),
                )
            })
            .collect()
    }
}
