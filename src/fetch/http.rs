// src/fetch/http.rs
// =============================================================================
// Fetches pages over HTTP(S) with reqwest.
//
// Key functionality:
// - One reqwest Client per opener (connection pooling across fetches)
// - Request timeout and redirect limit from OpenerConfig
// - Non-2xx responses are errors; the body is only read on success
// - The body is decoded using the response charset and handed on as UTF-8
// =============================================================================

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::Opener;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_REDIRECTS: usize = 5;
pub const DEFAULT_USER_AGENT: &str = concat!("page-links/", env!("CARGO_PKG_VERSION"));

/// Settings for the HTTP opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenerConfig {
    pub timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for OpenerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// An [`Opener`] that performs a GET request.
#[derive(Debug, Clone)]
pub struct HttpOpener {
    client: Client,
}

impl HttpOpener {
    pub fn new() -> Result<Self> {
        Self::with_config(&OpenerConfig::default())
    }

    pub fn with_config(config: &OpenerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Opener for HttpOpener {
    async fn open(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(anyhow!("HTTP {} for {}", status.as_u16(), url));
        }

        // text() honours the charset in Content-Type, so whatever the page
        // was encoded in, the parser gets UTF-8
        let body = response.text().await?;
        debug!("Fetched {} ({} bytes, HTTP {})", url, body.len(), status.as_u16());

        Ok(body.into_bytes())
    }
}
