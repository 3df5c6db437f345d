// src/classifier/domain.rs
// =============================================================================
// Scoping page links to the base URL's domain, and normalizing them.
//
// How it works:
// 1. Work out what form the href is in (absolute, scheme-relative, relative)
// 2. Drop it if it points at another host
// 3. Resolve it against the base URL
// 4. Strip the query string and fragment
//
// "Same domain" means the exact same host string. Subdomains are other
// domains: a.google.com is not google.com.
// =============================================================================

use url::{ParseError, Url};

/// The shape of an href, as far as domain scoping is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkForm {
    /// Has its own scheme: "https://orkut.com/x", "mailto:a@b.com"
    Absolute(Url),
    /// Has a host but no scheme: "//cdn.google.com/x"
    SchemeRelative,
    /// No host at all: "/about", "page.html", "?q=1"
    Relative,
}

// Works out the form of an href
//
// Returns None when the href cannot be parsed as a URL at all
// (e.g. "http://[broken"), in which case it can't be scoped or resolved.
pub fn link_form(href: &str) -> Option<LinkForm> {
    if href.starts_with("//") {
        return Some(LinkForm::SchemeRelative);
    }

    match Url::parse(href) {
        Ok(url) => Some(LinkForm::Absolute(url)),
        Err(ParseError::RelativeUrlWithoutBase) => Some(LinkForm::Relative),
        Err(_) => None,
    }
}

// Resolves an href to an absolute same-domain URL without query or fragment
//
// Returns None if the href is outside the base URL's domain or can't be
// resolved.
//
// Examples (base = "https://google.com"):
//   "/about?x=1#y"            -> Some("https://google.com/about")
//   "//google.com/feed"       -> Some("https://google.com/feed")
//   "https://orkut.com"       -> None (other host)
//   "https://a.google.com/x"  -> None (subdomain)
pub fn normalize_domain_link(base: &Url, href: &str) -> Option<String> {
    let mut resolved = match link_form(href)? {
        LinkForm::Absolute(url) => url,
        // Joining gives scheme-relative links the base scheme and gives
        // relative links the base host
        LinkForm::SchemeRelative | LinkForm::Relative => base.join(href).ok()?,
    };

    if resolved.host_str() != base.host_str() {
        return None;
    }

    resolved.set_query(None);
    resolved.set_fragment(None);

    Some(resolved.to_string())
}
