//! Responsible-contributor attribution.

use std::collections::HashMap;

use crate::issue::Commit;

/// Pick the contributor responsible for an issue.
///
/// The most frequent commit author wins; ties resolve to the author who
/// appears first in the commit sequence. Without commits the workflow
/// actor who started the issue is credited; with neither there is nobody
/// to name.
#[must_use]
pub fn attribute_resource(commits: &[Commit], started_by: Option<&str>) -> Option<String> {
    if commits.is_empty() {
        return started_by.map(str::to_owned);
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for commit in commits {
        *counts.entry(commit.author.name.as_str()).or_default() += 1;
    }
    let top = counts.values().copied().max()?;

    commits
        .iter()
        .map(|commit| commit.author.name.as_str())
        .find(|name| counts.get(name) == Some(&top))
        .map(str::to_owned)
}
