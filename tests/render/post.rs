use safari_blog::models::{BlogPost, ContentImages, neighbors};
use safari_blog::render_post;

use crate::preview;

fn post() -> BlogPost {
    BlogPost {
        id: 4,
        title: "Dawn & Dusk in \"Amboseli\"".to_string(),
        content: "Morning game drive.\n\n[IMAGE:elephant.webp][IMAGE:kilimanjaro.webp]\n\n*Unforgettable.*"
            .to_string(),
        cover_image: Some("cover.webp".to_string()),
        content_images: ["elephant.webp", "kilimanjaro.webp"]
            .into_iter()
            .collect::<ContentImages>(),
        created_at: "2026-03-07T06:15:00Z".parse().unwrap(),
    }
}

#[test]
fn article_structure() {
    let html = render_post(&post(), &preview());

    let cover = html.find("<figure").unwrap();
    let title = html.find("<h1").unwrap();
    let time = html.find("<time").unwrap();
    let body = html.find("prose").unwrap();
    assert!(cover < title && title < time && time < body);

    assert!(html.starts_with("<article"));
    assert!(html.ends_with("</div>\n</article>\n"));
}

#[test]
fn title_is_escaped() {
    let html = render_post(&post(), &preview());
    assert!(html.contains(">Dawn &amp; Dusk in \"Amboseli\"</h1>"));
    assert!(html.contains("alt=\"Dawn &amp; Dusk in &quot;Amboseli&quot;\""));
}

#[test]
fn date_is_human_readable() {
    let html = render_post(&post(), &preview());
    assert!(html.contains("<time datetime=\"2026-03-07T06:15:00+00:00\">March 7, 2026</time>"));
}

#[test]
fn body_uses_content_images() {
    let html = render_post(&post(), &preview());
    assert!(html.contains("/api/uploads/blog-images/cover.webp"));
    assert!(html.contains("/api/uploads/blog-images/elephant.webp"));
    assert!(html.contains("/api/uploads/blog-images/kilimanjaro.webp"));
    assert_eq!(html.matches("md:grid-cols-2").count(), 1);
    assert!(html.contains("<em>Unforgettable.</em>"));
}

#[test]
fn images_outside_content_images_do_not_resolve() {
    let mut post = post();
    post.content_images = ContentImages::new();
    post.cover_image = None;

    let html = render_post(&post, &preview());
    assert!(!html.contains("<figure"));
    assert!(!html.contains("<img"));
    assert!(html.contains("Missing image: elephant.webp"));
}

#[test]
fn navigation_between_posts() {
    let mut older = post();
    older.id = 1;
    let mut newer = post();
    newer.id = 9;
    let posts = vec![newer, post(), older];

    let (prev, next) = neighbors(&posts, 4);
    assert_eq!(prev.map(|p| p.id), Some(9));
    assert_eq!(next.map(|p| p.id), Some(1));
}
