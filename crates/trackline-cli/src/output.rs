//! Output formatting for the CLI.

use trackline_core::{ChartEntry, time};

/// Output format for the history chart.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    #[default]
    Json,
    /// YAML output
    Yaml,
    /// Human-readable table
    Human,
}

/// Print the chart in the selected format.
pub fn print_chart(entries: &[ChartEntry], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(entries).expect("Failed to serialize to JSON")
            );
        }
        OutputFormat::Yaml => {
            println!(
                "{}",
                serde_yaml::to_string(entries).expect("Failed to serialize to YAML")
            );
        }
        OutputFormat::Human => print_table(entries),
    }
}

/// Print the chart as a fixed-width table with dynamic column widths.
fn print_table(entries: &[ChartEntry]) {
    if entries.is_empty() {
        println!("No issues matched.");
        return;
    }

    let key_width = entries
        .iter()
        .map(|e| e.issue.key.len())
        .max()
        .unwrap_or(3)
        .max(3);
    let resource_width = entries
        .iter()
        .map(|e| e.resource.as_ref().map_or(1, String::len))
        .max()
        .unwrap_or(8)
        .max(8);

    println!(
        "{:<key_w$}  {:<28}  {:<28}  {:>8}  {:<resource_w$}  {}",
        "KEY",
        "STARTED",
        "COMPLETED",
        "ESTIMATE",
        "RESOURCE",
        "COMMITS",
        key_w = key_width,
        resource_w = resource_width
    );
    let total_width = key_width + resource_width + 28 + 28 + 8 + 17;
    println!("{}", "-".repeat(total_width));

    for entry in entries {
        let started = entry
            .issue
            .started
            .as_ref()
            .map_or_else(|| "-".to_string(), time::format);
        let completed = entry
            .issue
            .completed
            .as_ref()
            .map_or_else(|| "-".to_string(), time::format);
        let estimate = entry
            .issue
            .estimate
            .map_or_else(|| "-".to_string(), |seconds| seconds.to_string());
        let resource = entry.resource.as_deref().unwrap_or("-");

        println!(
            "{:<key_w$}  {:<28}  {:<28}  {:>8}  {:<resource_w$}  {:>7}",
            entry.issue.key,
            started,
            completed,
            estimate,
            resource,
            entry.commits.len(),
            key_w = key_width,
            resource_w = resource_width
        );
    }
}
