//! # Guideline Harness CLI (`gdl`)
//!
//! One-shot search over local mobile UI/UX guideline tables. Every
//! invocation runs a single query end to end and exits; there is no
//! server process and no state between runs.
//!
//! ## Usage
//!
//! ```bash
//! gdl "<query>" [--domain <d>[,<d>...]] [--stack <s>] [--platform <p>]
//!     [--format <f>] [--max-results <n>] [--json]
//! ```
//!
//! ## Examples
//!
//! ```bash
//! # Auto-routed domain search
//! gdl "bottom sheet dialog"
//!
//! # Pinned domain, one-line summaries
//! gdl "elevation" --domain component --format summary
//!
//! # Multi-domain with a platform filter
//! gdl "primary" --domain color,typography --platform android
//!
//! # Stack-specific guidelines, machine-readable
//! gdl "state handling" --stack swiftui --json
//! ```
//!
//! Application-level failures (unknown stack, missing table file) are part
//! of the response envelope and exit 0; only argument-parse errors and
//! hard I/O faults exit non-zero.

use clap::Parser;
use std::path::PathBuf;

use guideline_harness::{config, render, search};

/// Guideline Harness — a local-first search tool for mobile UI/UX design
/// guidelines.
#[derive(Parser)]
#[command(
    name = "gdl",
    about = "Guideline Harness — local BM25 search over mobile UI/UX design guideline tables",
    version,
    long_about = "Guideline Harness ranks rows of local CSV guideline tables against a free-text \
    query using BM25. Queries are routed to a domain table (color, typography, components, ...) \
    automatically, or pinned with --domain / --stack. Results render as markdown, a one-line \
    summary, extracted code examples, or JSON."
)]
struct Cli {
    /// The search query string.
    query: String,

    /// Search domain(s). A comma-separated list triggers multi-domain
    /// mode; omit to auto-detect from the query.
    #[arg(long, short = 'd')]
    domain: Option<String>,

    /// Stack-specific guideline search (takes priority over --domain).
    #[arg(long, short = 's')]
    stack: Option<String>,

    /// Filter results by platform.
    #[arg(long, short = 'p', value_parser = ["ios", "android", "cross-platform"])]
    platform: Option<String>,

    /// Output format.
    #[arg(long, short = 'f', default_value = "markdown",
          value_parser = ["markdown", "json", "summary", "code-only"])]
    format: String,

    /// Maximum number of results (defaults to the configured limit).
    #[arg(long, short = 'n')]
    max_results: Option<usize>,

    /// Output as JSON (shortcut for --format json).
    #[arg(long)]
    json: bool,

    /// Path to configuration file (TOML). Missing file means defaults.
    #[arg(long, default_value = "./gdl.toml")]
    config: PathBuf,

    /// Override the data directory from config.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::load_config(&cli.config)?;
    if let Some(dir) = cli.data_dir {
        cfg.data.dir = dir;
    }

    let limit = cli.max_results.unwrap_or(cfg.retrieval.max_results);
    let format = if cli.json { "json" } else { cli.format.as_str() };

    // Stack search takes priority over domain search.
    let response = if let Some(stack) = &cli.stack {
        search::search_stack(&cfg, &cli.query, stack, limit)?
    } else if cli.domain.as_deref().map_or(false, |d| d.contains(',')) {
        let domains: Vec<String> = cli
            .domain
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();
        search::search_multi_domain(&cfg, &cli.query, &domains, limit, cli.platform.as_deref())?
    } else {
        let mut response =
            search::search_domain(&cfg, &cli.query, cli.domain.as_deref(), limit)?;
        if let Some(platform) = &cli.platform {
            if !response.results.is_empty() {
                response.results =
                    search::filter_by_platform(std::mem::take(&mut response.results), platform);
                response.count = response.results.len();
                response.platform = Some(platform.clone());
            }
        }
        response
    };

    println!("{}", render::render(&response, format)?);
    Ok(())
}
