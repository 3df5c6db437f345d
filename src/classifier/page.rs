// src/classifier/page.rs
// =============================================================================
// PageLinkClassifier: sorts the links of one page into four sets.
//
// - page_links:       navigable links, exactly as written in the href
// - domain_links:     page links on the base URL's host, made absolute,
//                     without query string or fragment
// - feed_links:       Atom/RSS/XML feeds
// - stylesheet_links: CSS
//
// Each set is computed the first time it's asked for and cached. Asking
// again returns the cached set without touching the document.
// =============================================================================

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, info};
use url::Url;

use super::base_url::validate_base_url;
use super::domain::normalize_domain_link;
use super::error::{ClassifierError, Result};
use super::predicates::{is_feed, is_page_link, is_stylesheet};
use super::report::LinkReport;
use crate::document::{Document, ElementKind, LinkElement, Parser};
use crate::fetch::Opener;

const ANCHORS_AND_LINKS: &[ElementKind] = &[ElementKind::Anchor, ElementKind::Link];

/// Classifies the links of a single page.
///
/// `D` is the parsed page. Pass an owned document to hand it over, or a
/// reference (`&HtmlDocument`) to keep ownership with the caller.
pub struct PageLinkClassifier<D> {
    url: String,
    base: Url,
    document: D,
    page_links: OnceLock<HashSet<String>>,
    domain_links: OnceLock<HashSet<String>>,
    feed_links: OnceLock<HashSet<String>>,
    stylesheet_links: OnceLock<HashSet<String>>,
}

impl<D: Document> PageLinkClassifier<D> {
    /// Builds a classifier over an already parsed document.
    ///
    /// Fails with [`ClassifierError::InvalidUrl`] unless `url` is an
    /// absolute http(s) URL.
    pub fn new(url: &str, document: D) -> Result<Self> {
        let base = validate_base_url(url)?;

        Ok(Self {
            url: url.to_string(),
            base,
            document,
            page_links: OnceLock::new(),
            domain_links: OnceLock::new(),
            feed_links: OnceLock::new(),
            stylesheet_links: OnceLock::new(),
        })
    }

    /// Validates `url`, fetches it with `opener` and parses the bytes with
    /// `parser`.
    ///
    /// The URL is checked before anything is fetched. Opener and parser
    /// errors come back as [`ClassifierError::FetchFailed`] and
    /// [`ClassifierError::ParseFailed`] without being altered.
    pub async fn fetch<O, P>(url: &str, opener: &O, parser: &P) -> Result<Self>
    where
        O: Opener + ?Sized,
        P: Parser<Document = D>,
    {
        validate_base_url(url)?;

        let bytes = opener
            .open(url)
            .await
            .map_err(ClassifierError::FetchFailed)?;

        let document = parser.parse(&bytes).map_err(ClassifierError::ParseFailed)?;
        info!("Parsed {} ({} bytes)", url, bytes.len());

        Self::new(url, document)
    }

    /// The validated base URL.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// The URL exactly as given at construction.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Navigable links, minus feeds and stylesheets.
    pub fn page_links(&self) -> &HashSet<String> {
        self.page_links.get_or_init(|| {
            let mut links = self.collect(ANCHORS_AND_LINKS, is_page_link);

            let feeds = self.feed_links();
            let stylesheets = self.stylesheet_links();
            links.retain(|href| !feeds.contains(href) && !stylesheets.contains(href));

            debug!("{} page link(s) on {}", links.len(), self.url);
            links
        })
    }

    /// Page links on the base URL's host, absolute, without query or
    /// fragment.
    pub fn domain_links(&self) -> &HashSet<String> {
        self.domain_links.get_or_init(|| {
            let links: HashSet<String> = self
                .page_links()
                .iter()
                .filter_map(|href| normalize_domain_link(&self.base, href))
                .collect();

            debug!("{} domain link(s) on {}", links.len(), self.url);
            links
        })
    }

    /// Feed links. An element that is also a stylesheet
    /// (`rel="stylesheet" href="/theme.xml"`) is a stylesheet, not a feed.
    pub fn feed_links(&self) -> &HashSet<String> {
        self.feed_links.get_or_init(|| {
            let mut links = self.collect(ANCHORS_AND_LINKS, is_feed);

            let stylesheets = self.stylesheet_links();
            links.retain(|href| !stylesheets.contains(href));

            debug!("{} feed link(s) on {}", links.len(), self.url);
            links
        })
    }

    pub fn stylesheet_links(&self) -> &HashSet<String> {
        self.stylesheet_links.get_or_init(|| {
            let links = self.collect(&[ElementKind::Link], is_stylesheet);
            debug!("{} stylesheet link(s) on {}", links.len(), self.url);
            links
        })
    }

    /// Snapshot of all four sets, sorted, for printing or serializing.
    pub fn report(&self) -> LinkReport {
        LinkReport::new(
            self.url.clone(),
            self.page_links(),
            self.domain_links(),
            self.feed_links(),
            self.stylesheet_links(),
        )
    }

    // One pass over the document: hrefs of the elements of `kinds` that
    // satisfy `matches`
    fn collect(
        &self,
        kinds: &[ElementKind],
        matches: fn(&LinkElement) -> bool,
    ) -> HashSet<String> {
        self.document
            .select(kinds)
            .iter()
            .filter(|element| matches(element))
            .filter_map(|element| element.navigable_href().map(str::to_string))
            .collect()
    }
}

impl<D> fmt::Display for PageLinkClassifier<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl<D> fmt::Debug for PageLinkClassifier<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageLinkClassifier")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is OnceLock?
//    - A cell that can be written exactly once
//    - get_or_init() runs the closure on first access and stores the result
//    - Later calls return a reference to the stored value
//    - If two threads race, only one closure runs; the other waits
//
// 2. Why is PageLinkClassifier generic over D?
//    - D is whatever Document the caller has
//    - PageLinkClassifier<HtmlDocument> owns its page
//    - PageLinkClassifier<&HtmlDocument> borrows it, so the caller keeps it
//
// 3. Why `fn(&LinkElement) -> bool` instead of a closure?
//    - The predicates are plain functions, and a function pointer is the
//      simplest type that names them
// -----------------------------------------------------------------------------
