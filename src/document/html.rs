// src/document/html.rs
// =============================================================================
// HTML parsing with the `scraper` crate.
//
// scraper parses HTML into a DOM using html5ever (the same parser as Servo),
// so malformed markup is recovered the way a browser would recover it. We
// query the DOM with CSS selectors built from the requested element kinds,
// e.g. [Anchor, Link] becomes "a, link".
// =============================================================================

use anyhow::Result;
use scraper::{Html, Selector};
use tracing::{debug, warn};

use super::{Document, ElementKind, LinkElement, Parser};

/// Parses HTML bytes into an [`HtmlDocument`].
///
/// Bytes that aren't valid UTF-8 are replaced with U+FFFD rather than
/// rejected, so the markup around them still parses.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for HtmlParser {
    type Document = HtmlDocument;

    fn parse(&self, bytes: &[u8]) -> Result<HtmlDocument> {
        let text = String::from_utf8_lossy(bytes);
        if let std::borrow::Cow::Owned(_) = text {
            debug!("Page is not valid UTF-8, replaced invalid bytes");
        }

        Ok(HtmlDocument::parse(&text))
    }
}

/// A parsed HTML page.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(text: &str) -> Self {
        let html = Html::parse_document(text);

        // html5ever never gives up on bad markup; it records what it fixed
        if !html.errors.is_empty() {
            debug!("Recovered from {} HTML parse error(s)", html.errors.len());
        }

        Self { html }
    }
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument").finish_non_exhaustive()
    }
}

impl Document for HtmlDocument {
    fn select(&self, kinds: &[ElementKind]) -> Vec<LinkElement> {
        if kinds.is_empty() {
            return Vec::new();
        }

        let query = kinds
            .iter()
            .map(|kind| kind.tag_name())
            .collect::<Vec<_>>()
            .join(", ");

        let selector = match Selector::parse(&query) {
            Ok(selector) => selector,
            Err(e) => {
                warn!("Could not build selector '{}': {}", query, e);
                return Vec::new();
            }
        };

        self.html
            .select(&selector)
            .filter_map(|element| {
                let value = element.value();
                let kind = match value.name() {
                    "a" => ElementKind::Anchor,
                    "link" => ElementKind::Link,
                    _ => return None,
                };

                Some(LinkElement {
                    kind,
                    href: value.attr("href").map(str::to_string),
                    mime_type: value.attr("type").map(str::to_string),
                    rel: value.attr("rel").map(str::to_string),
                })
            })
            .collect()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Selectors with commas
//    - "a, link" matches every <a> and every <link>, in document order
//    - Same syntax as document.querySelectorAll() in a browser
//
// 2. Why return owned LinkElements?
//    - scraper's ElementRef borrows from the Html tree
//    - Copying the three attributes out means callers don't hold that borrow
// -----------------------------------------------------------------------------
