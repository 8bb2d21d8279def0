use crate::config::Config;
use crate::linter::diagnostics::Diagnostic;
use crate::placeholder::{Placeholder, scan_placeholders};

pub mod malformed_placeholder;
pub mod missing_image;
pub mod unused_image;

/// Content under lint, scanned once and shared by every rule.
pub struct Document<'a> {
    pub input: &'a str,
    pub placeholders: Vec<Placeholder<'a>>,
    /// Uploaded images for the post, when known
    pub images: Option<&'a [String]>,
}

impl<'a> Document<'a> {
    pub fn new(input: &'a str, images: Option<&'a [String]>) -> Self {
        Self {
            input,
            placeholders: scan_placeholders(input),
            images,
        }
    }
}

pub trait Rule {
    fn name(&self) -> &str;
    fn check(&self, document: &Document<'_>, config: &Config) -> Vec<Diagnostic>;
}

pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
