//! Mapping image names to display URLs.
//!
//! The renderer never builds URLs itself; callers inject an [`ImageResolver`].
//! Any `Fn(&str) -> Option<String>` closure works as a resolver.

use std::collections::HashSet;

use crate::config::Config;

pub trait ImageResolver {
    /// Return the display URL for `name`, or `None` if the image is unknown.
    fn resolve(&self, name: &str) -> Option<String>;
}

impl<F> ImageResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Resolves names against the backend's upload directory:
/// `<api_base><uploads_path>/<name>`.
#[derive(Debug, Clone)]
pub struct UploadsResolver {
    prefix: String,
    known: Option<HashSet<String>>,
}

impl UploadsResolver {
    /// Resolve every name, known or not.
    pub fn new(config: &Config) -> Self {
        Self {
            prefix: config.uploads_url(),
            known: None,
        }
    }

    /// Resolve only the given names (typically a post's content images).
    pub fn with_known<I, S>(config: &Config, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefix: config.uploads_url(),
            known: Some(names.into_iter().map(Into::into).collect()),
        }
    }

    /// URL for a name, without checking whether it is known.
    pub fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.prefix, name)
    }
}

impl ImageResolver for UploadsResolver {
    fn resolve(&self, name: &str) -> Option<String> {
        match &self.known {
            Some(known) if !known.contains(name) => None,
            _ => Some(self.url_for(name)),
        }
    }
}
