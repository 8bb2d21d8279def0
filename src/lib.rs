pub mod config;
pub mod editor;
pub mod fragments;
pub mod grouping;
pub mod inline;
pub mod linter;
pub mod models;
pub mod placeholder;
pub mod render;
pub mod resolver;
pub mod substitute;

#[cfg(feature = "admin")]
pub mod admin;

pub use config::Config;
pub use config::ConfigBuilder;
pub use models::BlogPost;
pub use render::{Block, render_blocks, render_html, render_post};
pub use resolver::{ImageResolver, UploadsResolver};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Renders blog content to markup, resolving images against the uploads
/// directory from `config`.
///
/// Line endings are normalized, placeholders are grouped over the whole
/// content, and each line becomes a paragraph, an image block or a line
/// break.
///
/// # Examples
///
/// ```no_run
/// use safari_blog::render;
///
/// let cfg = safari_blog::ConfigBuilder::default().group_threshold(50).build();
///
/// let images = vec!["lion.webp".to_string()];
/// let html = render("A **big** cat\n\n[IMAGE:lion.webp]", Some(&images), Some(cfg));
/// ```
///
/// # Arguments
///
/// * `content` - Raw post content
/// * `images` - Names that may resolve; `None` resolves every name
/// * `config` - Optional configuration (defaults to default config)
pub fn render(content: &str, images: Option<&[String]>, config: Option<Config>) -> String {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();
    let resolver = match images {
        Some(names) => UploadsResolver::with_known(&config, names.iter()),
        None => UploadsResolver::new(&config),
    };
    render_html(content, &resolver, &config)
}

pub fn render_with_defaults(content: &str) -> String {
    render(content, None, None)
}
