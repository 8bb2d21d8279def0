//! Adjacency grouping of image placeholders.
//!
//! Placeholders that sit close together in the source are rendered as one
//! visual unit. Closeness is the number of characters between the end of
//! one placeholder and the start of the next; a gap strictly below the
//! threshold chains the two into the same group. Chains may grow to any
//! length.
//!
//! Grouping looks at the whole content string, not at single lines, so a
//! pair separated by a blank line still forms one group.

use std::ops::Range;

use crate::placeholder::Placeholder;

/// Default gap (in characters) below which two placeholders share a group.
pub const DEFAULT_GROUP_THRESHOLD: usize = 50;

/// A run of consecutive placeholders, as indices into the scanned list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    members: Range<usize>,
}

impl Group {
    fn starting_at(index: usize) -> Self {
        Self {
            members: index..index + 1,
        }
    }

    /// Indices of the placeholders in this group, in source order.
    pub fn members(&self) -> Range<usize> {
        self.members.clone()
    }

    /// Index of the placeholder that carries the rendered fragment.
    pub fn leader(&self) -> usize {
        self.members.start
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Groups of two or more render as a grid.
    pub fn is_grid(&self) -> bool {
        self.len() >= 2
    }
}

/// What a placeholder turns into during substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Alone in its group: rendered as a single image block
    Single,
    /// First member of a grid group: rendered as the whole grid
    Lead { group: usize },
    /// Later member of a grid group: removed, the leader renders it
    Absorbed { group: usize },
}

/// Characters between two placeholders of `content`.
fn char_gap(content: &str, prev: &Placeholder<'_>, next: &Placeholder<'_>) -> usize {
    content
        .get(prev.end()..next.start)
        .map_or(0, |between| between.chars().count())
}

/// Partition the placeholders scanned from `content` into adjacency groups.
///
/// Pure function of positions: the same input always yields the same groups.
pub fn group_placeholders(
    content: &str,
    placeholders: &[Placeholder<'_>],
    threshold: usize,
) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();

    for (i, ph) in placeholders.iter().enumerate() {
        let joins_previous = i > 0 && char_gap(content, &placeholders[i - 1], ph) < threshold;

        match groups.last_mut() {
            Some(current) if joins_previous => current.members.end = i + 1,
            _ => groups.push(Group::starting_at(i)),
        }
    }

    log::debug!(
        "Grouped {} placeholder(s) into {} group(s) (threshold {})",
        placeholders.len(),
        groups.len(),
        threshold
    );
    groups
}

/// Assign a role to every placeholder index.
pub fn roles(groups: &[Group], placeholder_count: usize) -> Vec<Role> {
    let mut roles = vec![Role::Single; placeholder_count];

    for (g, group) in groups.iter().enumerate() {
        if !group.is_grid() {
            continue;
        }
        for i in group.members() {
            roles[i] = if i == group.leader() {
                Role::Lead { group: g }
            } else {
                Role::Absorbed { group: g }
            };
        }
    }

    roles
}
