//! History-chart assembly.
//!
//! Joins changelog-derived timings with linked commits into per-issue
//! chart entries and orders the finished chart by start instant.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::calendar::WorkCalendar;
use crate::changelog::{StatusLabels, scan_changelog};
use crate::estimate::EstimateProjector;
use crate::issue::{Commit, Issue, RepositoryCommits};
use crate::resource::attribute_resource;
use crate::time;

/// Timeline facts about one issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartIssue {
    /// Issue key.
    pub key: String,

    /// Creation instant.
    #[serde(with = "time::instant")]
    pub created: DateTime<FixedOffset>,

    /// When work last started.
    #[serde(with = "time::instant_opt", default, skip_serializing_if = "Option::is_none")]
    pub started: Option<DateTime<FixedOffset>>,

    /// When the issue last resolved.
    #[serde(with = "time::instant_opt", default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<DateTime<FixedOffset>>,

    /// Declared estimate in seconds, reported only for started work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<u32>,

    /// Where the estimate projects completion on the work calendar.
    #[serde(with = "time::instant_opt", default, skip_serializing_if = "Option::is_none")]
    pub estimated_completion: Option<DateTime<FixedOffset>>,
}

/// One reconciled issue: its timeline, its linked commits, and the
/// contributor held responsible for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    /// Timeline facts.
    pub issue: ChartIssue,

    /// Linked commits, flattened across repositories in originating order.
    pub commits: Vec<Commit>,

    /// Responsible contributor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

/// Assembles chart entries and orders the finished chart.
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    labels: StatusLabels,
    projector: EstimateProjector,
}

impl ChartBuilder {
    /// Create a builder projecting estimates over `calendar`, scanning
    /// changelogs for the default status labels.
    #[must_use]
    pub fn new(calendar: WorkCalendar) -> Self {
        Self {
            labels: StatusLabels::default(),
            projector: EstimateProjector::new(calendar),
        }
    }

    /// Replace the status labels the changelog scan looks for.
    #[must_use]
    pub fn with_labels(mut self, labels: StatusLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Build the chart entry for one issue from its linked commit groups.
    #[must_use]
    pub fn entry(&self, issue: &Issue, commit_groups: Vec<RepositoryCommits>) -> ChartEntry {
        let timings = scan_changelog(&issue.changelog.histories, &self.labels);

        let estimate = timings
            .started
            .and(issue.fields.time_estimate)
            .filter(|&seconds| seconds > 0);
        let estimated_completion = self.projector.project(timings.started, estimate);

        let commits = flatten_commits(commit_groups);
        let resource = attribute_resource(&commits, timings.started_by.as_deref());

        ChartEntry {
            issue: ChartIssue {
                key: issue.key.clone(),
                created: issue.fields.created,
                started: timings.started,
                completed: timings.completed,
                estimate,
                estimated_completion,
            },
            commits,
            resource,
        }
    }

    /// Build the whole chart: one entry per issue, commits supplied per
    /// issue by `fetch_commits`, ordered by start instant.
    ///
    /// # Errors
    /// The first `fetch_commits` failure aborts the build and surfaces
    /// unchanged; no partial chart is produced.
    pub fn build<E, F>(&self, issues: &[Issue], mut fetch_commits: F) -> Result<Vec<ChartEntry>, E>
    where
        F: FnMut(&Issue) -> Result<Vec<RepositoryCommits>, E>,
    {
        let mut entries = Vec::with_capacity(issues.len());
        for issue in issues {
            let commit_groups = fetch_commits(issue)?;
            entries.push(self.entry(issue, commit_groups));
        }
        sort_chart(&mut entries);
        Ok(entries)
    }
}

/// Flatten repository groupings into one commit sequence, preserving the
/// originating order.
fn flatten_commits(commit_groups: Vec<RepositoryCommits>) -> Vec<Commit> {
    commit_groups
        .into_iter()
        .flat_map(|group| group.commits)
        .collect()
}

/// Order entries by start instant, ascending. Entries that never started
/// come first; the sort is stable, so equal starts keep their query order.
pub fn sort_chart(entries: &mut [ChartEntry]) {
    entries.sort_by(|a, b| a.issue.started.cmp(&b.issue.started));
}
