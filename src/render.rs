//! Turning blog content into blocks of markup.
//!
//! Placeholders are scanned and grouped over the whole document first, then
//! the content is split on newlines and every line becomes one block:
//!
//! - a line holding a placeholder is a media block (not wrapped in `<p>`)
//! - a line with other non-blank text is a paragraph
//! - a blank line is a line break
//!
//! A media line whose placeholders were all drawn by a grid on an earlier
//! line, and which has nothing else on it, yields no block.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::Config;
use crate::fragments::{self, Segment, join_segments};
use crate::inline::format_segments;
use crate::models::BlogPost;
use crate::resolver::{ImageResolver, UploadsResolver};
use crate::substitute::{Plan, substitute_range};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A line of prose, already formatted, without the `<p>` wrapper
    Paragraph(String),
    /// A line carrying images, emitted as-is
    Media(String),
    LineBreak,
}

impl Block {
    pub fn to_html(&self, config: &Config) -> String {
        match self {
            Block::Paragraph(inner) => fragments::paragraph(inner, config),
            Block::Media(inner) => format!("<div>{inner}</div>"),
            Block::LineBreak => "<br />".to_string(),
        }
    }
}

/// Render `content` to a list of blocks.
pub fn render_blocks(content: &str, resolver: &dyn ImageResolver, config: &Config) -> Vec<Block> {
    let normalized = content.replace("\r\n", "\n");
    let content = normalized.as_str();
    let plan = Plan::new(content, config.group_threshold);
    let mut blocks = Vec::new();

    if content.is_empty() {
        return blocks;
    }

    let mut line_start = 0;
    for line in content.split('\n') {
        let range = line_start..line_start + line.len();
        line_start = range.end + 1;

        if !plan.within(range.clone()).is_empty() {
            let segments = substitute_range(content, range, &plan, resolver, config);
            if segments.iter().all(Segment::is_blank) {
                log::trace!("Skipping line absorbed into an earlier grid");
                continue;
            }
            let segments = format_segments(segments, config);
            blocks.push(Block::Media(join_segments(&segments, config)));
        } else if !line.trim().is_empty() {
            let segments = format_segments(vec![Segment::Text(line)], config);
            blocks.push(Block::Paragraph(join_segments(&segments, config)));
        } else {
            blocks.push(Block::LineBreak);
        }
    }

    log::debug!(
        "Rendered {} block(s) from {} placeholder(s)",
        blocks.len(),
        plan.placeholders().len()
    );
    blocks
}

/// Render `content` to markup, one block per line.
pub fn render_html(content: &str, resolver: &dyn ImageResolver, config: &Config) -> String {
    render_blocks(content, resolver, config)
        .iter()
        .map(|block| block.to_html(config))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a whole post: cover image, title, date and body.
///
/// Only the post's own content images resolve.
pub fn render_post(post: &BlogPost, config: &Config) -> String {
    let resolver = UploadsResolver::with_known(config, post.content_images.iter());
    let title = encode_text(&post.title);
    let mut out = String::new();

    out.push_str("<article class=\"blog-post\">\n");

    if let Some(cover) = &post.cover_image {
        let url = UploadsResolver::new(config).url_for(cover);
        out.push_str(&format!(
            "<figure class=\"mb-12\"><img loading=\"lazy\" src=\"{}\" alt=\"{}\" class=\"w-full h-64 md:h-96 object-contain rounded-lg shadow-sm\" /></figure>\n",
            encode_double_quoted_attribute(&url),
            encode_double_quoted_attribute(&post.title),
        ));
    }

    out.push_str(&format!(
        "<h1 class=\"text-3xl md:text-4xl lg:text-5xl font-bold text-yellow-600 leading-tight mb-6\">{title}</h1>\n"
    ));
    out.push_str(&format!(
        "<time datetime=\"{}\">{}</time>\n",
        post.created_at.to_rfc3339(),
        post.display_date()
    ));

    out.push_str("<div class=\"prose prose-lg max-w-none\">\n");
    let body = render_html(&post.content, &resolver, config);
    if !body.is_empty() {
        out.push_str(&body);
        out.push('\n');
    }
    out.push_str("</div>\n</article>\n");
    out
}
