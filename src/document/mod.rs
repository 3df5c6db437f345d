// src/document/mod.rs
// =============================================================================
// The document side of the classifier: how a fetched page is turned into
// something we can query for anchors and link elements.
//
// The classifier never looks at HTML directly. It asks a Document for
// elements of a given kind and gets back a LinkElement for each one, with
// the attributes it cares about (href, type, rel) already pulled out.
//
// Submodules:
// - html: the scraper-backed parser used by default
// =============================================================================

mod html;

pub use html::{HtmlDocument, HtmlParser};

/// The element kinds the classifier selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `<a>`
    Anchor,
    /// `<link>`
    Link,
}

impl ElementKind {
    pub fn tag_name(self) -> &'static str {
        match self {
            ElementKind::Anchor => "a",
            ElementKind::Link => "link",
        }
    }
}

/// A selected element together with the attributes the classifier reads.
///
/// Missing attributes are `None`. An attribute that is present but empty
/// (`type=""`) is `Some("")`, which still counts as "has a type".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkElement {
    pub kind: ElementKind,
    pub href: Option<String>,
    pub mime_type: Option<String>,
    pub rel: Option<String>,
}

impl LinkElement {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            href: None,
            mime_type: None,
            rel: None,
        }
    }

    pub fn anchor(href: impl Into<String>) -> Self {
        Self::new(ElementKind::Anchor).with_href(href)
    }

    pub fn link(href: impl Into<String>) -> Self {
        Self::new(ElementKind::Link).with_href(href)
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    /// The href, if present and non-empty.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref().filter(|href| !href.is_empty())
    }

    /// The href, unless it is missing, empty or an in-page "#..." jump.
    pub fn navigable_href(&self) -> Option<&str> {
        self.href().filter(|href| !href.starts_with('#'))
    }
}

/// A parsed page that can be queried for link-bearing elements.
pub trait Document {
    /// Returns every element whose kind is one of `kinds`, in document order.
    fn select(&self, kinds: &[ElementKind]) -> Vec<LinkElement>;
}

// A borrowed document is still a document. This lets a caller keep
// ownership of the page and lend it to a classifier.
impl<D: Document + ?Sized> Document for &D {
    fn select(&self, kinds: &[ElementKind]) -> Vec<LinkElement> {
        (**self).select(kinds)
    }
}

/// Builds a Document from raw page bytes.
pub trait Parser {
    type Document: Document;

    fn parse(&self, bytes: &[u8]) -> anyhow::Result<Self::Document>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_href_is_treated_as_missing() {
        assert_eq!(LinkElement::anchor("").href(), None);
        assert_eq!(LinkElement::new(ElementKind::Link).href(), None);
        assert_eq!(LinkElement::anchor("/a").href(), Some("/a"));
    }

    #[test]
    fn test_in_page_jumps_are_not_navigable() {
        assert_eq!(LinkElement::anchor("#top").navigable_href(), None);
        assert_eq!(LinkElement::link("#x.xml").navigable_href(), None);
        assert_eq!(LinkElement::anchor("").navigable_href(), None);
        assert_eq!(LinkElement::anchor("/a#top").navigable_href(), Some("/a#top"));
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(ElementKind::Anchor.tag_name(), "a");
        assert_eq!(ElementKind::Link.tag_name(), "link");
    }
}
