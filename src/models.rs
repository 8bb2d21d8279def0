//! Blog posts and testimonials as served by the backend.
//!
//! The backend owns these records; the client only holds copies fetched on
//! demand and refetches whole lists after every change.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::placeholder::scan_placeholders;

/// Uploaded images available for placement in a post's content.
///
/// Ordered by upload and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContentImages(Vec<String>);

impl ContentImages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a name. Returns false if it was already present.
    pub fn push(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for ContentImages {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut images = ContentImages::new();
        for name in iter {
            images.push(name);
        }
        images
    }
}

impl<'a> IntoIterator for &'a ContentImages {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// The backend sends `null` for posts created before content images existed.
impl<'de> Deserialize<'de> for ContentImages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Option::<Vec<String>>::deserialize(deserializer)?;
        Ok(names.unwrap_or_default().into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub content_images: ContentImages,
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    /// Creation date as shown to readers, e.g. `October 19, 2026`.
    pub fn display_date(&self) -> String {
        self.created_at.format("%B %-d, %Y").to_string()
    }

    /// Names referenced by placeholders in the content, in order of first use.
    pub fn referenced_images(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for placeholder in scan_placeholders(&self.content) {
            if !names.contains(&placeholder.name) {
                names.push(placeholder.name);
            }
        }
        names
    }

    /// Content images that no placeholder refers to.
    pub fn unplaced_images(&self) -> Vec<&str> {
        let referenced = self.referenced_images();
        self.content_images
            .iter()
            .map(String::as_str)
            .filter(|name| !referenced.contains(name))
            .collect()
    }
}

/// Sort posts newest first. Posts with equal timestamps keep their order.
pub fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Previous and next post around `id` in a listing, as used by the
/// detail page navigation.
pub fn neighbors(posts: &[BlogPost], id: i64) -> (Option<&BlogPost>, Option<&BlogPost>) {
    let Some(index) = posts.iter().position(|p| p.id == id) else {
        return (None, None);
    };
    let prev = index.checked_sub(1).and_then(|i| posts.get(i));
    let next = posts.get(index + 1);
    (prev, next)
}

/// A post being written or edited in the admin panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    /// New cover image to upload; `None` keeps the current one.
    pub cover_image: Option<PathBuf>,
    pub content_images: ContentImages,
}

impl BlogDraft {
    /// Start editing an existing post. The cover image is not re-uploaded.
    pub fn from_post(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            cover_image: None,
            content_images: post.content_images.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Blog title is required".to_string());
        }
        if self.content.trim().is_empty() {
            return Err("Blog content is required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub email: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

pub fn sort_testimonials_newest_first(testimonials: &mut [Testimonial]) {
    testimonials.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewTestimonial {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub content: String,
}

impl NewTestimonial {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Testimonial name is required".to_string());
        }
        if self.content.trim().is_empty() {
            return Err("Testimonial content is required".to_string());
        }
        Ok(())
    }
}
