//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Gist REST API conformance test suite
#[derive(Parser, Debug)]
#[command(name = "gist-suite")]
#[command(version = "0.1.0")]
#[command(about = "Run conformance scenarios against a Gist REST API")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run conformance scenarios
    Run(RunArgs),

    /// List available scenarios
    List(ListArgs),

    /// Delete every gist the configured token owns (requires --yes)
    Cleanup(CleanupArgs),

    /// Show environment variable help
    Env,
}

/// Arguments for run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Base API endpoint (overrides GIST_SUITE_ENDPOINT)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Bearer token (overrides GIST_SUITE_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Specific scenario number to run (1-18)
    #[arg(short, long)]
    pub scenario: Option<u8>,

    /// Number of suite rounds
    #[arg(short, long, default_value = "1")]
    pub rounds: u32,

    /// Output format (table, json, json-pretty, csv, summary;
    /// overrides GIST_SUITE_FORMAT, default table)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Timeout in seconds (overrides GIST_SUITE_TIMEOUT, default 30)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Skip specific scenarios (comma-separated numbers)
    #[arg(long)]
    pub skip: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show scenario categories and numbers in detail
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for cleanup command
#[derive(Parser, Debug)]
pub struct CleanupArgs {
    /// Base API endpoint (overrides GIST_SUITE_ENDPOINT)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Bearer token (overrides GIST_SUITE_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Confirm deletion of every listed gist
    #[arg(long)]
    pub yes: bool,

    /// Maximum number of deletions (1-100)
    #[arg(long, default_value = "100", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=100))]
    pub max: usize,
}

/// Parse a comma-separated skip list into scenario numbers
pub fn parse_skip_list(skip: &str) -> Vec<u8> {
    skip.split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect()
}
