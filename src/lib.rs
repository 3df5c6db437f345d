// src/lib.rs
// =============================================================================
// page-links: classify the links of one web page.
//
// Given a page URL and its parsed HTML, PageLinkClassifier splits the page's
// links into page links, same-domain links, feed links and stylesheet links,
// so a crawler can decide what to visit next.
//
// Modules:
// - classifier: the classification rules and PageLinkClassifier
// - document:   the Document/Parser traits and the scraper-backed parser
// - fetch:      the Opener trait and the reqwest-backed opener
// =============================================================================

pub mod classifier;
pub mod document;
pub mod fetch;

pub use classifier::{ClassifierError, LinkCategory, LinkReport, PageLinkClassifier};
pub use document::{Document, ElementKind, HtmlDocument, HtmlParser, LinkElement, Parser};
pub use fetch::{HttpOpener, Opener, OpenerConfig};
