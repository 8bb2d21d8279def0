//! Rendering behaviour through the public API.

mod post;
mod properties;

use safari_blog::{Config, ConfigBuilder};
use safari_blog::config::Style;

pub fn resolve_all(name: &str) -> Option<String> {
    Some(format!("/uploads/{name}"))
}

pub fn resolve_none(_name: &str) -> Option<String> {
    None
}

pub fn preview() -> Config {
    ConfigBuilder::default().style(Style::Preview).build()
}
