// src/classifier/base_url.rs
// =============================================================================
// Validates the base URL a classifier is built from.
//
// The base URL anchors everything else: relative links are resolved against
// it and its host decides what "same domain" means. So it has to be an
// absolute URL with an http or https scheme and a host.
// =============================================================================

use url::Url;

use super::error::{ClassifierError, Result};

// Parses and validates a base URL
//
// Valid:   "http://x.com", "https://x.com/path"
// Invalid: "ftp://x.com" (wrong scheme), "/foo" and "foo" (relative)
pub fn validate_base_url(url: &str) -> Result<Url> {
    // Url::parse only succeeds for absolute URLs; relative input fails with
    // RelativeUrlWithoutBase
    let parsed = Url::parse(url).map_err(|_| ClassifierError::invalid_url(url))?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(ClassifierError::invalid_url(url));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_base_url("http://google.com").is_ok());
        assert!(validate_base_url("https://google.com/path?q=1").is_ok());
    }

    #[test]
    fn test_rejects_other_schemes() {
        let err = validate_base_url("ftp://foo.com").unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidUrl { .. }));
        assert!(validate_base_url("mailto:someone@foo.com").is_err());
        assert!(validate_base_url("file:///etc/hosts").is_err());
    }

    #[test]
    fn test_rejects_relative_urls() {
        assert!(validate_base_url("/foo").is_err());
        assert!(validate_base_url("foo").is_err());
        assert!(validate_base_url("//foo.com/bar").is_err());
    }

    #[test]
    fn test_error_keeps_offending_url() {
        match validate_base_url("/foo") {
            Err(ClassifierError::InvalidUrl { url }) => assert_eq!(url, "/foo"),
            other => panic!("expected InvalidUrl, got {:?}", other),
        }
    }
}
