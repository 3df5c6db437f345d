// src/classifier/error.rs
// =============================================================================
// Errors produced while building a PageLinkClassifier.
//
// There are exactly three ways construction can fail:
// - the base URL is not an absolute http(s) URL
// - the opener could not fetch the page
// - the parser could not turn the bytes into a document
//
// Once a classifier exists, classification itself never fails: a missing
// attribute just means "no match".
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    /// The base URL is relative or uses a scheme other than http/https
    #[error("URL must be absolute and have an HTTP(S) scheme")]
    InvalidUrl { url: String },

    /// Error returned by the opener, passed through untouched
    #[error(transparent)]
    FetchFailed(anyhow::Error),

    /// Error returned by the parser, passed through untouched
    #[error(transparent)]
    ParseFailed(anyhow::Error),
}

impl ClassifierError {
    pub(crate) fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_message_is_fixed() {
        let err = ClassifierError::invalid_url("ftp://foo.com");
        assert_eq!(
            err.to_string(),
            "URL must be absolute and have an HTTP(S) scheme"
        );
    }

    #[test]
    fn test_fetch_failed_is_transparent() {
        let err = ClassifierError::FetchFailed(anyhow::anyhow!("HTTP 503"));
        assert_eq!(err.to_string(), "HTTP 503");
    }
}
