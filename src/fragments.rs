//! HTML fragments emitted by the renderer.
//!
//! Every fragment is produced on a single line so that later line-based
//! processing never splits one. Generated attribute values are always
//! escaped; prose text is escaped only when the config asks for it.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::{Config, MissingImagePolicy, Style};

/// A piece of rendered output.
///
/// `Text` is raw content that later passes (emphasis) may still rewrite;
/// `Html` is finished markup that no later pass looks inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Html(String),
}

impl Segment<'_> {
    pub fn is_blank(&self) -> bool {
        match self {
            Segment::Text(t) => t.trim().is_empty(),
            Segment::Html(h) => h.is_empty(),
        }
    }
}

/// Join segments into a markup string.
pub fn join_segments(segments: &[Segment<'_>], config: &Config) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text(t) if config.escape_text => out.push_str(&encode_text(t)),
            Segment::Text(t) => out.push_str(t),
            Segment::Html(h) => out.push_str(h),
        }
    }
    out
}

/// CSS classes for one rendering style.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub single_outer: &'static str,
    pub single_frame: &'static str,
    pub single_img: &'static str,
    pub grid: &'static str,
    pub grid_cell: &'static str,
    pub grid_img: &'static str,
    pub missing: &'static str,
    pub paragraph: &'static str,
    pub strong: &'static str,
    pub em: &'static str,
    pub underline: &'static str,
}

const DETAIL_THEME: Theme = Theme {
    single_outer: "my-8 flex justify-center",
    single_frame: "bg-gray-200 rounded-lg p-4 max-w-3xl shadow-sm",
    single_img: "w-full h-64 md:h-80 object-contain rounded-lg shadow-sm hover:scale-105 transition-transform duration-700",
    grid: "my-8 grid grid-cols-1 gap-8",
    grid_cell: "bg-gray-200 rounded-lg p-3 shadow-sm",
    grid_img: "w-full h-48 md:h-56 object-contain rounded-lg shadow-sm hover:scale-105 transition-transform duration-700",
    missing: "missing-image border-2 border-dashed border-red-300 rounded-lg p-4 text-red-600 text-sm",
    paragraph: "mb-6 leading-relaxed text-gray-600 text-lg",
    strong: "font-bold text-gray-900",
    em: "italic text-gray-800",
    underline: "underline decoration-2 decoration-yellow-600",
};

const PREVIEW_THEME: Theme = Theme {
    single_outer: "my-4",
    single_frame: "",
    single_img: "w-full h-64 object-cover rounded-lg",
    grid: "my-4 grid grid-cols-1 gap-4",
    grid_cell: "",
    grid_img: "w-full h-48 object-cover rounded-lg",
    missing: "missing-image border border-dashed border-red-400 p-2 text-red-600 text-sm",
    paragraph: "mb-4",
    strong: "",
    em: "",
    underline: "",
};

impl Theme {
    pub fn for_style(style: Style) -> &'static Theme {
        match style {
            Style::Detail => &DETAIL_THEME,
            Style::Preview => &PREVIEW_THEME,
        }
    }
}

/// One image to place, resolved or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef<'a> {
    pub name: &'a str,
    pub token: &'a str,
    pub url: Option<&'a str>,
}

/// Open a tag with an optional class attribute.
fn open_tag(out: &mut String, tag: &str, class: &str) {
    out.push('<');
    out.push_str(tag);
    if !class.is_empty() {
        out.push_str(" class=\"");
        out.push_str(class);
        out.push('"');
    }
    out.push('>');
}

fn push_img(out: &mut String, url: &str, alt: &str, class: &str) {
    out.push_str("<img loading=\"lazy\" src=\"");
    out.push_str(&encode_double_quoted_attribute(url));
    out.push_str("\" alt=\"");
    out.push_str(&encode_double_quoted_attribute(alt));
    out.push('"');
    if !class.is_empty() {
        out.push_str(" class=\"");
        out.push_str(class);
        out.push('"');
    }
    out.push_str(" />");
}

fn push_missing(out: &mut String, name: &str, theme: &Theme) {
    out.push_str("<div class=\"");
    out.push_str(theme.missing);
    out.push_str("\" data-missing-image=\"");
    out.push_str(&encode_double_quoted_attribute(name));
    out.push_str("\">Missing image: ");
    out.push_str(&encode_text(name));
    out.push_str("</div>");
}

/// Wrap a single image in a centred, width-capped block.
pub fn single_image(url: &str, config: &Config) -> String {
    let theme = Theme::for_style(config.style);
    let mut out = String::new();
    open_tag(&mut out, "div", theme.single_outer);
    open_tag(&mut out, "div", theme.single_frame);
    push_img(&mut out, url, "Blog image", theme.single_img);
    out.push_str("</div></div>");
    out
}

/// Block shown in place of an image that could not be resolved.
pub fn missing_image(name: &str, config: &Config) -> String {
    let theme = Theme::for_style(config.style);
    let mut out = String::new();
    open_tag(&mut out, "div", theme.single_outer);
    push_missing(&mut out, name, theme);
    out.push_str("</div>");
    out
}

/// Grid with one cell per image, in source order.
///
/// Unresolved members render as a missing-image cell, or as the literal
/// token under the literal policy.
pub fn image_grid(images: &[ImageRef<'_>], config: &Config) -> String {
    let theme = Theme::for_style(config.style);
    let columns = config.grid_columns.max(1).min(images.len().max(1));

    let mut out = String::new();
    out.push_str("<div class=\"");
    out.push_str(theme.grid);
    out.push_str(&format!(" md:grid-cols-{columns}\">"));

    for (index, image) in images.iter().enumerate() {
        open_tag(&mut out, "div", theme.grid_cell);
        match image.url {
            Some(url) => {
                push_img(
                    &mut out,
                    url,
                    &format!("Blog image {}", index + 1),
                    theme.grid_img,
                );
            }
            None => match config.missing_images {
                MissingImagePolicy::Placeholder => push_missing(&mut out, image.name, theme),
                MissingImagePolicy::Literal => out.push_str(&encode_text(image.token)),
            },
        }
        out.push_str("</div>");
    }

    out.push_str("</div>");
    out
}

/// Wrap emphasised text in an inline element.
pub fn emphasis(tag: &str, class: &str, inner: &str, config: &Config) -> String {
    let mut out = String::new();
    open_tag(&mut out, tag, class);
    if config.escape_text {
        out.push_str(&encode_text(inner));
    } else {
        out.push_str(inner);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}

/// Wrap a rendered line in a paragraph element.
pub fn paragraph(inner: &str, config: &Config) -> String {
    let theme = Theme::for_style(config.style);
    let mut out = String::new();
    open_tag(&mut out, "p", theme.paragraph);
    out.push_str(inner);
    out.push_str("</p>");
    out
}
