// src/fetch/mod.rs
// =============================================================================
// Fetching a page's raw bytes.
//
// The classifier doesn't care where bytes come from; it only needs something
// that implements Opener. The default opener makes HTTP requests with
// reqwest, and tests plug in stubs.
//
// Submodules:
// - http: the reqwest-backed opener and its settings
// =============================================================================

mod http;

pub use http::{
    HttpOpener, OpenerConfig, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

use async_trait::async_trait;

/// Fetches the raw content of a URL.
///
/// Errors are handed back to the caller exactly as returned; the classifier
/// doesn't retry or wrap them.
#[async_trait]
pub trait Opener: Send + Sync {
    async fn open(&self, url: &str) -> anyhow::Result<Vec<u8>>;
}
