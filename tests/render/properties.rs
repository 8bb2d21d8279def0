use safari_blog::config::MissingImagePolicy;
use safari_blog::inline::format_inline;
use safari_blog::{Block, Config, ConfigBuilder, render_blocks, render_html};

use crate::{preview, resolve_all, resolve_none};

fn img_count(html: &str) -> usize {
    html.matches("<img").count()
}

#[test]
fn text_without_placeholders_only_gets_emphasis() {
    let cfg = preview();
    let content = "Just *some* **text** here\nand __another__ line";
    let blocks = render_blocks(content, &resolve_all, &cfg);

    let expected: Vec<Block> = content
        .lines()
        .map(|line| Block::Paragraph(format_inline(line, &cfg)))
        .collect();
    assert_eq!(blocks, expected);
}

#[test]
fn isolated_image_between_paragraphs() {
    let blocks = render_blocks("A\n\n[IMAGE:x.webp]\n\nB", &resolve_all, &preview());

    assert_eq!(blocks.len(), 5);
    assert_eq!(blocks[0], Block::Paragraph("A".to_string()));
    assert_eq!(blocks[1], Block::LineBreak);
    let Block::Media(media) = &blocks[2] else {
        panic!("expected an image block, got {:?}", blocks[2]);
    };
    assert!(media.contains("src=\"/uploads/x.webp\""));
    assert!(media.contains("alt=\"Blog image\""));
    assert!(!media.contains("grid"));
    assert_eq!(blocks[3], Block::LineBreak);
    assert_eq!(blocks[4], Block::Paragraph("B".to_string()));
}

#[test]
fn adjacent_placeholders_form_one_grid() {
    let html = render_html("[IMAGE:a.webp][IMAGE:b.webp]", &resolve_all, &preview());
    assert_eq!(html.matches("md:grid-cols-2").count(), 1);
    assert_eq!(img_count(&html), 2);
    assert!(html.find("a.webp").unwrap() < html.find("b.webp").unwrap());
}

#[test]
fn distant_placeholders_stay_single() {
    let filler = "x".repeat(200);
    let html = render_html(
        &format!("[IMAGE:a.webp]{filler}[IMAGE:b.webp]"),
        &resolve_all,
        &preview(),
    );
    assert!(!html.contains("grid"));
    assert_eq!(img_count(&html), 2);
    assert_eq!(html.matches("alt=\"Blog image\"").count(), 2);
}

#[test]
fn threshold_is_exclusive() {
    let cfg = preview();
    let close = format!("[IMAGE:a]{}[IMAGE:b]", " ".repeat(49));
    let far = format!("[IMAGE:a]{}[IMAGE:b]", " ".repeat(50));

    assert!(render_html(&close, &resolve_all, &cfg).contains("grid"));
    assert!(!render_html(&far, &resolve_all, &cfg).contains("grid"));
}

#[test]
fn threshold_counts_characters_not_bytes() {
    let gap = "野生動物".repeat(5);
    assert_eq!(gap.chars().count(), 20);
    assert_eq!(gap.len(), 60);

    let html = render_html(&format!("[IMAGE:a]{gap}[IMAGE:b]"), &resolve_all, &preview());
    assert_eq!(html.matches("md:grid-cols-2").count(), 1);
    assert_eq!(img_count(&html), 2);

    let far = format!("[IMAGE:a]{}[IMAGE:b]", "é".repeat(50));
    assert!(!render_html(&far, &resolve_all, &preview()).contains("grid"));
}

#[test]
fn threshold_comes_from_config() {
    let cfg = ConfigBuilder::default().group_threshold(0).build();
    let html = render_html("[IMAGE:a][IMAGE:b]", &resolve_all, &cfg);
    assert!(!html.contains("grid"));
    assert_eq!(img_count(&html), 2);
}

#[test]
fn chained_placeholders_form_one_grid() {
    let html = render_html("[IMAGE:a] [IMAGE:b] [IMAGE:c]", &resolve_all, &preview());
    assert_eq!(html.matches("grid-cols-1").count(), 1);
    assert_eq!(img_count(&html), 3);
}

#[test]
fn every_resolvable_placeholder_renders_once() {
    let filler = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do.";
    let cases = [
        ("[IMAGE:a]", 1),
        ("[IMAGE:a][IMAGE:b]", 2),
        ("[IMAGE:a]\n\n[IMAGE:b]\n\n[IMAGE:c]", 3),
        ("[IMAGE:a][IMAGE:a]", 2),
        ("text [IMAGE:a] text\nmore [IMAGE:b]", 2),
        ("[IMAGE:unterminated", 0),
        ("[IMAGE:]", 0),
    ];
    for (content, expected) in cases {
        let html = render_html(content, &resolve_all, &preview());
        assert_eq!(img_count(&html), expected, "content: {content:?}");
    }

    let spread = format!("[IMAGE:a]\n{filler}\n[IMAGE:b][IMAGE:c]\n{filler}\n[IMAGE:d]");
    let html = render_html(&spread, &resolve_all, &preview());
    assert_eq!(img_count(&html), 4);
    assert_eq!(html.matches("md:grid-cols-2").count(), 1);
}

#[test]
fn grid_spanning_lines_emits_one_block() {
    let blocks = render_blocks("[IMAGE:a]\n[IMAGE:b]\nafter", &resolve_all, &preview());
    assert_eq!(blocks.len(), 2);
    assert!(matches!(&blocks[0], Block::Media(html) if img_count(html) == 2));
    assert_eq!(blocks[1], Block::Paragraph("after".to_string()));
}

#[test]
fn absorbed_line_with_text_keeps_its_text() {
    let blocks = render_blocks("[IMAGE:a]\ncaption [IMAGE:b]", &resolve_all, &preview());
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1], Block::Media("caption ".to_string()));
}

#[test]
fn bold_is_resolved_before_italic() {
    let html = render_html("**x*y*z**", &resolve_all, &preview());
    assert_eq!(html, "<p class=\"mb-4\"><strong>x*y*z</strong></p>");
}

#[test]
fn bold_and_italic_side_by_side() {
    let html = render_html("**bold** and *italic*", &resolve_all, &preview());
    assert_eq!(
        html,
        "<p class=\"mb-4\"><strong>bold</strong> and <em>italic</em></p>"
    );
}

#[test]
fn formatting_formatted_output_changes_nothing() {
    let cfg = Config::default();
    let once = format_inline("**a** then *b* then __c__", &cfg);
    assert_eq!(format_inline(&once, &cfg), once);
}

#[test]
fn image_urls_are_not_touched_by_emphasis() {
    let html = render_html("[IMAGE:my__photo__1.webp]", &resolve_all, &preview());
    assert!(html.contains("src=\"/uploads/my__photo__1.webp\""));
    assert!(!html.contains("<u>"));
}

#[test]
fn unresolvable_image_shows_missing_block() {
    let html = render_html("[IMAGE:gone.webp]\n\n**still** rendered", &resolve_none, &preview());
    assert!(html.contains("Missing image: gone.webp"));
    assert_eq!(img_count(&html), 0);
    assert!(html.ends_with("<p class=\"mb-4\"><strong>still</strong> rendered</p>"));
}

#[test]
fn unresolvable_image_literal_policy() {
    let cfg = ConfigBuilder::default()
        .missing_images(MissingImagePolicy::Literal)
        .build();
    let html = render_html("see [IMAGE:gone.webp]", &resolve_none, &cfg);
    assert_eq!(html, "<div>see [IMAGE:gone.webp]</div>");
}

#[test]
fn literal_policy_keeps_token_intact_everywhere() {
    let cfg = ConfigBuilder::default()
        .style(safari_blog::config::Style::Preview)
        .missing_images(MissingImagePolicy::Literal)
        .build();

    let single = render_html("[IMAGE:my__old__shot.png] *x*", &resolve_none, &cfg);
    assert_eq!(single, "<div>[IMAGE:my__old__shot.png] <em>x</em></div>");

    let grid = render_html("[IMAGE:my__old__shot.png][IMAGE:*b*]", &resolve_none, &cfg);
    assert!(grid.contains("[IMAGE:my__old__shot.png]"));
    assert!(grid.contains("[IMAGE:*b*]"));
    assert!(!grid.contains("<u>"));
    assert!(!grid.contains("<em>"));
}

#[test]
fn partially_resolvable_grid() {
    let resolve_a = |name: &str| (name == "a").then(|| "/a".to_string());
    let html = render_html("[IMAGE:a][IMAGE:b]", &resolve_a, &preview());
    assert_eq!(img_count(&html), 1);
    assert!(html.contains("Missing image: b"));
    assert!(html.contains("md:grid-cols-2"));
}

#[test]
fn empty_content_renders_nothing() {
    assert!(render_blocks("", &resolve_all, &preview()).is_empty());
}

#[test]
fn escape_text_escapes_prose_only() {
    let cfg = ConfigBuilder::default().escape_text(true).build();
    let html = render_html("<script>x</script> [IMAGE:a]", &resolve_all, &cfg);
    assert!(html.starts_with("<div>&lt;script&gt;x&lt;/script&gt; <div"));
    assert!(html.contains("<img"));
}
