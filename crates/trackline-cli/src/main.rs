//! trackline CLI - per-issue history reconciliation from the command line.

mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use trackline_core::{RESOLVED_STATUS, STARTED_STATUS, StatusLabels, WorkCalendar};

#[derive(Parser)]
#[command(name = "trackline")]
#[command(author, version, about = "Reconcile issue-tracker history with linked commits")]
struct Cli {
    /// Tracker endpoint, host or URL (e.g. jira.example.com)
    endpoint: String,

    /// Issue search query (JQL)
    query: String,

    /// Login credentials as USER[:PASSWORD]
    #[arg(long, short = 'u', env = "JIRA_USER", value_name = "USER:PWD")]
    user: Option<String>,

    /// Working seconds per day used for estimate projection
    #[arg(long, default_value_t = 86_400)]
    day_length: u32,

    /// Seconds since midnight at which the work day ends
    #[arg(long, default_value_t = 86_400)]
    day_end: u32,

    /// Status whose entry marks the start of work
    #[arg(long, default_value = STARTED_STATUS)]
    started_status: String,

    /// Status whose entry marks completion
    #[arg(long, default_value = RESOLVED_STATUS)]
    resolved_status: String,

    /// Output format
    #[arg(long, default_value = "json")]
    format: output::OutputFormat,

    /// Log request detail regardless of RUST_LOG
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries the report.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let calendar = WorkCalendar::new(cli.day_length, cli.day_end)
        .context("Invalid work calendar configuration")?;
    let labels = StatusLabels {
        started: cli.started_status,
        resolved: cli.resolved_status,
    };

    commands::run(
        &cli.endpoint,
        &cli.query,
        cli.user.as_deref(),
        calendar,
        labels,
        cli.format,
    )
}
