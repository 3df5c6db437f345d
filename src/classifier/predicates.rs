// src/classifier/predicates.rs
// =============================================================================
// The rules that decide what kind of link an element is.
//
// Each rule is a plain function over a LinkElement, so every rule can be
// tested on its own without parsing any HTML. Extension checks use substring
// containment ("/logo.png?v=2" is still an image), and MIME types and rel
// values are compared exactly.
// =============================================================================

use crate::document::{ElementKind, LinkElement};

/// hrefs containing one of these are images, never page links.
pub const IMAGE_EXTENSIONS: &[&str] = &[".gif", ".ico", ".jpg", ".jpeg", ".png", ".svg"];

/// hrefs on anchors containing one of these point at feeds.
pub const FEED_EXTENSIONS: &[&str] = &[".atom", ".rss", ".xml"];

/// `type` values that mark a link element as a feed.
pub const FEED_MIME_TYPES: &[&str] = &["application/atom+xml", "application/rss+xml"];

pub const STYLESHEET_MIME_TYPE: &str = "text/css";
pub const STYLESHEET_REL: &str = "stylesheet";

fn contains_any(href: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| href.contains(needle))
}

pub fn has_image_extension(href: &str) -> bool {
    contains_any(href, IMAGE_EXTENSIONS)
}

// None of the rules below ever match an element whose href is missing, empty
// or an in-page "#..." jump.

// Is this element a navigable page link?
//
// Anchors qualify when their href is not an image. Link elements
// additionally need an href starting with "http" or "/" and no `type`
// attribute at all: a typed link element is a feed or a stylesheet, and is
// left to those rules.
//
// This does not exclude feeds or stylesheets by itself; the classifier
// subtracts those sets afterwards.
pub fn is_page_link(element: &LinkElement) -> bool {
    let Some(href) = element.navigable_href() else {
        return false;
    };

    if has_image_extension(href) {
        return false;
    }

    match element.kind {
        ElementKind::Anchor => true,
        ElementKind::Link => {
            element.mime_type.is_none() && (href.starts_with("http") || href.starts_with('/'))
        }
    }
}

// Is this element a syndication feed?
//
// Anchors:       href contains .atom, .rss or .xml
// Link elements: type is an Atom/RSS MIME type, or href contains .xml
pub fn is_feed(element: &LinkElement) -> bool {
    let Some(href) = element.navigable_href() else {
        return false;
    };

    match element.kind {
        ElementKind::Anchor => contains_any(href, FEED_EXTENSIONS),
        ElementKind::Link => {
            let feed_type = element
                .mime_type
                .as_deref()
                .is_some_and(|mime| FEED_MIME_TYPES.contains(&mime));

            feed_type || href.contains(".xml")
        }
    }
}

// Is this element a stylesheet?
//
// Only link elements: type="text/css" or rel="stylesheet"
pub fn is_stylesheet(element: &LinkElement) -> bool {
    if element.kind != ElementKind::Link || element.navigable_href().is_none() {
        return false;
    }

    element.mime_type.as_deref() == Some(STYLESHEET_MIME_TYPE)
        || element.rel.as_deref() == Some(STYLESHEET_REL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_page_links() {
        assert!(is_page_link(&LinkElement::anchor("/relative-a")));
        assert!(is_page_link(&LinkElement::anchor("https://orkut.com")));
        assert!(is_page_link(&LinkElement::anchor("relative/no-slash")));
        assert!(is_page_link(&LinkElement::anchor("mailto:a@b.com")));
    }

    #[test]
    fn test_in_page_anchors_are_never_page_links() {
        assert!(!is_page_link(&LinkElement::anchor("#anchor")));
        assert!(!is_page_link(&LinkElement::link("#top")));
    }

    #[test]
    fn test_in_page_anchors_are_never_feeds_or_stylesheets() {
        assert!(!is_feed(&LinkElement::anchor("#release-notes.xml")));
        assert!(!is_feed(&LinkElement::anchor("#x.rss")));
        assert!(!is_feed(&LinkElement::anchor("#x.atom")));
        assert!(!is_feed(&LinkElement::link("#x").with_type("application/rss+xml")));
        assert!(!is_stylesheet(&LinkElement::link("#inline-styles").with_rel("stylesheet")));
        assert!(!is_stylesheet(&LinkElement::link("#x").with_type("text/css")));
    }

    #[test]
    fn test_missing_or_empty_href() {
        assert!(!is_page_link(&LinkElement::new(ElementKind::Anchor)));
        assert!(!is_page_link(&LinkElement::anchor("")));
        assert!(!is_feed(&LinkElement::anchor("")));
        assert!(!is_stylesheet(&LinkElement::new(ElementKind::Link).with_rel("stylesheet")));
    }

    #[test]
    fn test_images_are_excluded_anywhere_in_href() {
        assert!(!is_page_link(&LinkElement::anchor("/logo.png")));
        assert!(!is_page_link(&LinkElement::link("/favicon.ico").with_rel("icon")));
        assert!(!is_page_link(&LinkElement::anchor("/img.jpeg?size=2")));
        assert!(!is_page_link(&LinkElement::anchor("/a.svg/page")));
        // case-sensitive, like the rest of the matching
        assert!(is_page_link(&LinkElement::anchor("/LOGO.PNG")));
    }

    #[test]
    fn test_link_elements_need_http_or_slash() {
        assert!(is_page_link(&LinkElement::link("/relative-link")));
        assert!(is_page_link(&LinkElement::link("https://google.com/link")));
        assert!(!is_page_link(&LinkElement::link("relative-link")));
        assert!(!is_page_link(&LinkElement::link("android-app://x")));
    }

    #[test]
    fn test_typed_link_elements_are_not_page_links() {
        let typed = LinkElement::link("/page").with_type("text/html");
        assert!(!is_page_link(&typed));

        let empty_type = LinkElement::link("/page").with_type("");
        assert!(!is_page_link(&empty_type));

        // anchors may carry a type and still be page links
        assert!(is_page_link(&LinkElement::anchor("/page").with_type("text/html")));
    }

    #[test]
    fn test_feed_anchors() {
        assert!(is_feed(&LinkElement::anchor("/feed.atom")));
        assert!(is_feed(&LinkElement::anchor("/news.rss")));
        assert!(is_feed(&LinkElement::anchor("/sitemap.xml")));
        assert!(is_feed(&LinkElement::anchor("/feed.xml.gz")));
        assert!(!is_feed(&LinkElement::anchor("/feed")));
    }

    #[test]
    fn test_feed_link_elements() {
        let atom = LinkElement::link("/feed").with_type("application/atom+xml");
        let rss = LinkElement::link("/feed").with_type("application/rss+xml");
        let xml_href = LinkElement::link("/feed.xml");
        assert!(is_feed(&atom));
        assert!(is_feed(&rss));
        assert!(is_feed(&xml_href));

        // .atom/.rss extensions only count on anchors
        assert!(!is_feed(&LinkElement::link("/feed.atom")));
        assert!(!is_feed(&LinkElement::link("/feed").with_type("application/json")));
    }

    #[test]
    fn test_stylesheets() {
        assert!(is_stylesheet(&LinkElement::link("/a.css").with_type("text/css")));
        assert!(is_stylesheet(&LinkElement::link("/design?b").with_rel("stylesheet")));
        assert!(!is_stylesheet(&LinkElement::link("/a.css")));
        assert!(!is_stylesheet(&LinkElement::link("/a.css").with_rel("alternate stylesheet")));
        assert!(!is_stylesheet(&LinkElement::anchor("/a.css").with_type("text/css")));
    }
}
