// src/classifier/report.rs
// =============================================================================
// A printable, serializable snapshot of a classified page.
//
// The classifier's sets are unordered HashSets. For output we want stable,
// sorted lists, so the report copies each set into a sorted Vec.
// =============================================================================

use std::collections::HashSet;

use serde::Serialize;

/// The four link categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkCategory {
    Page,
    Domain,
    Feed,
    Stylesheet,
}

impl LinkCategory {
    pub const ALL: [LinkCategory; 4] = [
        LinkCategory::Page,
        LinkCategory::Domain,
        LinkCategory::Feed,
        LinkCategory::Stylesheet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LinkCategory::Page => "Page links",
            LinkCategory::Domain => "Domain links",
            LinkCategory::Feed => "Feed links",
            LinkCategory::Stylesheet => "Stylesheet links",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    /// The page URL as given
    pub url: String,
    pub page_links: Vec<String>,
    pub domain_links: Vec<String>,
    pub feed_links: Vec<String>,
    pub stylesheet_links: Vec<String>,
}

impl LinkReport {
    pub fn new(
        url: String,
        page_links: &HashSet<String>,
        domain_links: &HashSet<String>,
        feed_links: &HashSet<String>,
        stylesheet_links: &HashSet<String>,
    ) -> Self {
        Self {
            url,
            page_links: sorted(page_links),
            domain_links: sorted(domain_links),
            feed_links: sorted(feed_links),
            stylesheet_links: sorted(stylesheet_links),
        }
    }

    pub fn links(&self, category: LinkCategory) -> &[String] {
        match category {
            LinkCategory::Page => &self.page_links,
            LinkCategory::Domain => &self.domain_links,
            LinkCategory::Feed => &self.feed_links,
            LinkCategory::Stylesheet => &self.stylesheet_links,
        }
    }
}

fn sorted(links: &HashSet<String>) -> Vec<String> {
    let mut links: Vec<String> = links.iter().cloned().collect();
    links.sort();
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_report_sorts_links() {
        let report = LinkReport::new(
            "https://google.com".to_string(),
            &set(&["/b", "/a"]),
            &set(&["https://google.com/b", "https://google.com/a"]),
            &set(&[]),
            &set(&["/style.css"]),
        );

        assert_eq!(report.links(LinkCategory::Page), ["/a", "/b"]);
        assert_eq!(
            report.links(LinkCategory::Domain),
            ["https://google.com/a", "https://google.com/b"]
        );
        assert!(report.links(LinkCategory::Feed).is_empty());
        assert_eq!(report.links(LinkCategory::Stylesheet), ["/style.css"]);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = LinkReport::new(
            "https://google.com".to_string(),
            &set(&["/a"]),
            &set(&["https://google.com/a"]),
            &set(&["/feed.atom"]),
            &set(&[]),
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["url"], "https://google.com");
        assert_eq!(json["page_links"][0], "/a");
        assert_eq!(json["feed_links"][0], "/feed.atom");
        assert_eq!(json["stylesheet_links"].as_array().unwrap().len(), 0);
    }
}
