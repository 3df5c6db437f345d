// src/main.rs
// =============================================================================
// Entry point of the page-links CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging to stderr
// 3. Fetch the page, classify its links and print them
// 4. Exit with 0 on success, 2 on error
// =============================================================================

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use page_links::{HtmlParser, HttpOpener, LinkCategory, LinkReport, PageLinkClassifier};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so that --json output on stdout stays parseable.
// RUST_LOG wins over -v when it is set.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Classify {
            url,
            json,
            only,
            fetch,
        } => handle_classify(&url, json, only.map(LinkCategory::from), &fetch).await,
    }
}

async fn handle_classify(
    url: &str,
    json: bool,
    only: Option<LinkCategory>,
    fetch: &cli::FetchArgs,
) -> Result<()> {
    let opener = HttpOpener::with_config(&fetch.opener_config())?;
    let classifier = PageLinkClassifier::fetch(url, &opener, &HtmlParser::new()).await?;

    let report = classifier.report();
    print_report(&report, json, only)
}

fn print_report(report: &LinkReport, json: bool, only: Option<LinkCategory>) -> Result<()> {
    if json {
        let output = match only {
            Some(category) => serde_json::to_string_pretty(report.links(category))?,
            None => serde_json::to_string_pretty(report)?,
        };
        println!("{}", output);
        return Ok(());
    }

    match only {
        // One category: bare list, one URL per line, easy to pipe
        Some(category) => {
            for link in report.links(category) {
                println!("{}", link);
            }
        }
        None => print_listing(report),
    }

    Ok(())
}

fn print_listing(report: &LinkReport) {
    println!("Links on {}", report.url);
    println!("{}", "=".repeat(60));

    for category in LinkCategory::ALL {
        let links = report.links(category);
        println!();
        println!("{} ({})", category.label(), links.len());
        for link in links {
            println!("  {}", link);
        }
    }

    println!();
    println!("Summary:");
    for category in LinkCategory::ALL {
        println!("   {:<18} {}", category.label(), report.links(category).len());
    }
}
