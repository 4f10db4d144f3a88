//! veil-search CLI - run one privacy-proxied search from the command line.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use veil_search::{Search, SearchQuery, SearchResponse, Session};

/// veil-search - privacy search proxy CLI
#[derive(Parser)]
#[command(name = "veil-search")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search query
    query: String,

    /// Pagination offset into upstream results
    #[arg(short, long, default_value = "0")]
    start: u32,

    /// Number of results to request
    #[arg(short, long, default_value = "10")]
    num: u32,

    /// Interface language code forwarded upstream (e.g. "en")
    #[arg(long)]
    lang: Option<String>,

    /// Country code forwarded upstream (e.g. "US")
    #[arg(long)]
    country: Option<String>,

    /// Enable upstream safe-search filtering
    #[arg(long)]
    safe: bool,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "10")]
    timeout: u64,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    // An empty query never reaches the pipeline.
    let query_text = cli.query.trim();
    if query_text.is_empty() {
        anyhow::bail!("query cannot be empty");
    }

    let mut query = SearchQuery::new(query_text)
        .with_start(cli.start)
        .with_num(cli.num)
        .with_safe_search(cli.safe);
    if let Some(lang) = cli.lang {
        query = query.with_language(lang);
    }
    if let Some(country) = cli.country {
        query = query.with_country(country);
    }

    let session = Session::with_timeout(Duration::from_secs(cli.timeout));
    let search = Search::with_fetcher(Arc::new(session));
    let response = search.search(&query).await;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => print_text(&response),
    }

    if response.is_err() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_text(response: &SearchResponse) {
    if let Some(error) = response.error() {
        eprintln!("search failed: {error}");
        return;
    }

    println!("{} results for \"{}\"\n", response.total_results, response.query);
    for (i, result) in response.items().iter().enumerate() {
        println!("{}. {}", i + 1, result.title);
        println!("   {}", result.url);
        if !result.description.is_empty() {
            println!("   {}", result.description);
        }
        println!();
    }
}
