//! gist-suite - Gist REST API conformance test suite
//!
//! A CLI tool for validating a GitHub-style Gist API: create, read, update,
//! delete, star/unstar and list operations checked against expected status
//! codes and response bodies.
//!
//! ## Usage
//!
//! ```bash
//! # Run the full suite against api.github.com
//! export GIST_SUITE_TOKEN=ghp_xxxxxxxx
//! gist-suite run
//!
//! # Run a single scenario with JSON output
//! gist-suite run --scenario 4 --format json
//!
//! # Run against a different endpoint
//! gist-suite run --endpoint http://127.0.0.1:8080
//!
//! # List scenarios
//! gist-suite list --detailed
//!
//! # Purge the account's gists (explicit opt-in)
//! gist-suite cleanup --yes
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gist_suite::cleanup::purge_account;
use gist_suite::cli::{self, Args, CleanupArgs, ListArgs, RunArgs};
use gist_suite::config::{print_env_help, EnvConfig, SuiteConfig};
use gist_suite::gist::GistClient;
use gist_suite::models::Scenario;
use gist_suite::output::{OutputFormat, ResultFormatter};
use gist_suite::runner::SuiteRunner;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let verbose = args.verbose || EnvConfig::load().verbose_or(false);
    let default_level = if verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level.to_string())),
        )
        .with_target(false)
        .compact()
        .init();

    match args.command {
        cli::Command::Run(run_args) => run_suite(run_args).await?,
        cli::Command::List(list_args) => list_scenarios(list_args),
        cli::Command::Cleanup(cleanup_args) => run_cleanup(cleanup_args).await?,
        cli::Command::Env => print_env_help(),
    }

    Ok(())
}

fn resolve_config(endpoint: Option<String>, token: Option<String>, timeout: Option<u64>) -> SuiteConfig {
    let mut config = SuiteConfig::from_env();
    if let Some(endpoint) = endpoint {
        config = config.with_endpoint(endpoint);
    }
    if let Some(token) = token {
        config = config.with_token(token);
    }
    if let Some(timeout) = timeout {
        config = config.with_timeout(timeout);
    }
    config
}

async fn run_suite(args: RunArgs) -> Result<()> {
    let config = resolve_config(args.endpoint, args.token, args.timeout);

    if !config.has_token() {
        tracing::warn!("No bearer token configured; only failure scenarios can pass");
    }

    info!("Testing Gist API at {}", config.endpoint);

    let format = args
        .format
        .unwrap_or_else(|| EnvConfig::load().format_or("table"));
    let formatter = ResultFormatter::new(
        OutputFormat::from_str(&format).unwrap_or(OutputFormat::Table),
    );
    let formatter = if args.no_color {
        formatter.no_color()
    } else {
        formatter
    };

    let skip = args.skip.as_deref().map(cli::parse_skip_list).unwrap_or_default();
    let runner = SuiteRunner::new(config).with_skip(skip);

    if let Some(number) = args.scenario {
        let scenario = Scenario::from_number(number)
            .ok_or_else(|| anyhow::anyhow!("Invalid scenario number: {number}"))?;
        let result = runner.run_scenario(scenario).await;
        println!("{}", formatter.format_result(&result));
        if !result.status.is_success() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let mut all_passed = true;
    if args.rounds > 1 {
        for summary in runner.run_rounds(args.rounds).await? {
            println!("{}", formatter.format_summary(&summary));
            print!("{}", formatter.format_failures(&summary));
            all_passed &= summary.all_passed();
        }
    } else {
        let summary = runner.run_all().await?;
        println!("{}", formatter.format_summary(&summary));
        print!("{}", formatter.format_failures(&summary));
        all_passed = summary.all_passed();
    }

    if !all_passed {
        std::process::exit(1);
    }
    Ok(())
}

fn list_scenarios(args: ListArgs) {
    println!("Available scenarios:\n");

    let mut category = "";
    for scenario in Scenario::all() {
        if args.detailed && scenario.category() != category {
            category = scenario.category();
            println!("[{category}]");
        }
        println!("  {:2}. {}", scenario.number(), scenario.name());
    }
}

async fn run_cleanup(args: CleanupArgs) -> Result<()> {
    if !args.yes {
        anyhow::bail!(
            "cleanup deletes every gist the configured token owns; re-run with --yes to confirm"
        );
    }

    let config = resolve_config(args.endpoint, args.token, None);
    anyhow::ensure!(config.has_token(), "cleanup requires a bearer token");

    let client = GistClient::new(&config)?;
    let report = purge_account(&client, args.max).await?;

    info!(
        "Cleanup finished: {} deleted, {} failed, {} remaining",
        report.deleted, report.failed, report.remaining
    );
    Ok(())
}
