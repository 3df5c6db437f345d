// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// page-links classify <URL> [--json] [--only <category>]
//                           [--timeout <secs>] [--max-redirects <n>]
//                           [--user-agent <ua>] [-v...]
// =============================================================================

use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use page_links::fetch::{
    OpenerConfig, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use page_links::LinkCategory;

#[derive(Parser, Debug)]
#[command(
    name = "page-links",
    version,
    about = "Classify the links of a web page",
    long_about = "page-links fetches a single page and sorts its links into page links, \
                  same-domain links, feed links and stylesheet links."
)]
pub struct Cli {
    /// Increase log output (-v for debug, -vv for trace). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a page and classify its links
    ///
    /// Example: page-links classify https://example.com --only domain
    Classify {
        /// Absolute http(s) URL of the page
        url: String,

        /// Output results in JSON format instead of a listing
        #[arg(long)]
        json: bool,

        /// Only show one category of links
        #[arg(long, value_enum)]
        only: Option<CategoryArg>,

        #[command(flatten)]
        fetch: FetchArgs,
    },
}

/// Values accepted by --only.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryArg {
    Page,
    Domain,
    Feed,
    Stylesheet,
}

impl From<CategoryArg> for LinkCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Page => LinkCategory::Page,
            CategoryArg::Domain => LinkCategory::Domain,
            CategoryArg::Feed => LinkCategory::Feed,
            CategoryArg::Stylesheet => LinkCategory::Stylesheet,
        }
    }
}

/// HTTP settings for fetching the page.
#[derive(clap::Args, Debug, Clone)]
pub struct FetchArgs {
    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Maximum number of redirects to follow
    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,

    /// User-Agent header sent with the request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl FetchArgs {
    pub fn opener_config(&self) -> OpenerConfig {
        OpenerConfig {
            timeout: Duration::from_secs(self.timeout),
            max_redirects: self.max_redirects,
            user_agent: self.user_agent.clone(),
        }
    }
}
