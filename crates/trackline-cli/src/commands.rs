//! CLI command implementation.

use anyhow::{Context, Result};
use tracing::info;
use trackline_core::{ChartBuilder, StatusLabels, WorkCalendar};
use trackline_jira::{Credentials, JiraClient, resolve_endpoint};

use crate::output::{self, OutputFormat};

/// Run one reconciliation from issue search to printed chart.
pub fn run(
    endpoint: &str,
    query: &str,
    user: Option<&str>,
    calendar: WorkCalendar,
    labels: StatusLabels,
    format: OutputFormat,
) -> Result<()> {
    let endpoint = resolve_endpoint(endpoint);
    let credentials = user.map(Credentials::parse);
    let client =
        JiraClient::new(endpoint, credentials).context("Failed to build tracker client")?;
    let builder = ChartBuilder::new(calendar).with_labels(labels);

    let rt = tokio::runtime::Runtime::new()?;

    let issues = rt
        .block_on(client.search_all(query))
        .context("Issue search failed")?;
    info!(count = issues.len(), "Fetched issues");

    let chart = builder
        .build(&issues, |issue| rt.block_on(client.commits(&issue.id)))
        .context("Commit-link lookup failed")?;

    output::print_chart(&chart, format);
    Ok(())
}
