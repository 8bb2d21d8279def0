//! Replacing placeholders with image fragments.
//!
//! A placeholder alone in its group becomes a single image block. The first
//! placeholder of a larger group becomes a grid holding every member; the
//! other members are removed so each image is rendered exactly once.

use std::ops::Range;

use html_escape::encode_text;

use crate::config::{Config, MissingImagePolicy};
use crate::fragments::{self, ImageRef, Segment, join_segments};
use crate::grouping::{Group, Role, group_placeholders, roles};
use crate::placeholder::{Placeholder, scan_placeholders};
use crate::resolver::ImageResolver;

/// Placeholders of a whole document with their grouping decided.
#[derive(Debug, Clone)]
pub struct Plan<'a> {
    placeholders: Vec<Placeholder<'a>>,
    groups: Vec<Group>,
    roles: Vec<Role>,
}

impl<'a> Plan<'a> {
    /// Scan and group `content` in one go.
    pub fn new(content: &'a str, threshold: usize) -> Self {
        let placeholders = scan_placeholders(content);
        let groups = group_placeholders(content, &placeholders, threshold);
        Self::from_parts(placeholders, groups)
    }

    pub fn from_parts(placeholders: Vec<Placeholder<'a>>, groups: Vec<Group>) -> Self {
        let roles = roles(&groups, placeholders.len());
        Self {
            placeholders,
            groups,
            roles,
        }
    }

    pub fn placeholders(&self) -> &[Placeholder<'a>] {
        &self.placeholders
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Indices of the placeholders that start inside `range`.
    pub fn within(&self, range: Range<usize>) -> Range<usize> {
        let first = self
            .placeholders
            .partition_point(|p| p.start < range.start);
        let end = self.placeholders.partition_point(|p| p.start < range.end);
        first..end.max(first)
    }
}

fn resolve_logged(resolver: &dyn ImageResolver, name: &str) -> Option<String> {
    let url = resolver.resolve(name);
    if url.is_none() {
        log::warn!("No uploaded image named '{}'", name);
    }
    url
}

fn render_placeholder<'a>(
    index: usize,
    plan: &Plan<'a>,
    resolver: &dyn ImageResolver,
    config: &Config,
) -> Option<Segment<'a>> {
    let placeholder = &plan.placeholders[index];

    match plan.roles[index] {
        Role::Absorbed { .. } => None,
        Role::Single => {
            let segment = match resolve_logged(resolver, placeholder.name) {
                Some(url) => Segment::Html(fragments::single_image(&url, config)),
                None => match config.missing_images {
                    MissingImagePolicy::Placeholder => {
                        Segment::Html(fragments::missing_image(placeholder.name, config))
                    }
                    MissingImagePolicy::Literal => {
                        Segment::Html(encode_text(placeholder.token).into_owned())
                    }
                },
            };
            Some(segment)
        }
        Role::Lead { group } => {
            let members = &plan.placeholders[plan.groups[group].members()];
            let urls: Vec<Option<String>> = members
                .iter()
                .map(|p| resolve_logged(resolver, p.name))
                .collect();
            let images: Vec<ImageRef<'_>> = members
                .iter()
                .zip(&urls)
                .map(|(p, url)| ImageRef {
                    name: p.name,
                    token: p.token,
                    url: url.as_deref(),
                })
                .collect();
            Some(Segment::Html(fragments::image_grid(&images, config)))
        }
    }
}

/// Substitute the placeholders that start inside `range` of `content`.
///
/// Text between placeholders is kept as [`Segment::Text`] so emphasis can
/// still be applied to it; fragments are sealed [`Segment::Html`].
pub fn substitute_range<'a>(
    content: &'a str,
    range: Range<usize>,
    plan: &Plan<'a>,
    resolver: &dyn ImageResolver,
    config: &Config,
) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut pos = range.start;

    for index in plan.within(range.clone()) {
        let placeholder = &plan.placeholders[index];
        if placeholder.start > pos {
            segments.push(Segment::Text(&content[pos..placeholder.start]));
        }
        if let Some(segment) = render_placeholder(index, plan, resolver, config) {
            segments.push(segment);
        }
        pos = placeholder.end();
    }

    if pos < range.end {
        segments.push(Segment::Text(&content[pos..range.end]));
    }

    segments
}

/// Replace every placeholder in `content` with its fragment.
pub fn substitute(
    content: &str,
    plan: &Plan<'_>,
    resolver: &dyn ImageResolver,
    config: &Config,
) -> String {
    let segments = substitute_range(content, 0..content.len(), plan, resolver, config);
    join_segments(&segments, config)
}
