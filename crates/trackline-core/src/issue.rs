//! Tracker-side input records.
//!
//! Typed mirrors of the issue-search and commit-link payloads. Field
//! presence is meaningful: absent optionals stay absent through decode and
//! re-encode (never serialized as null), and unknown wire fields are
//! ignored.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::time;

/// A tracked unit of work with its status-change history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Tracker-internal identifier, used for commit-link lookups.
    pub id: String,

    /// Human-facing key (e.g. `TEST-1`), unique within a query result.
    pub key: String,

    /// The requested field subset.
    pub fields: IssueFields,

    /// Status-change history, in the order the tracker recorded it.
    #[serde(default)]
    pub changelog: Changelog,
}

/// The issue fields the reconciliation needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueFields {
    /// Creation instant.
    #[serde(with = "time::instant")]
    pub created: DateTime<FixedOffset>,

    /// Remaining estimate in seconds, when one was recorded.
    #[serde(rename = "timeestimate", default, skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<u32>,
}

/// The expanded changelog of an issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Changelog {
    /// Change events, oldest first.
    #[serde(default)]
    pub histories: Vec<ChangeEvent>,
}

/// One changelog entry: a set of field transitions applied together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// When the change was recorded.
    #[serde(with = "time::instant")]
    pub created: DateTime<FixedOffset>,

    /// Who made the change, when the tracker knows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Actor>,

    /// The individual field transitions in this entry.
    #[serde(default)]
    pub items: Vec<FieldTransition>,
}

/// A single field-level transition within a change event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTransition {
    /// Name of the field that changed (e.g. `status`).
    pub field: String,

    /// Display value before the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_string: Option<String>,

    /// Display value after the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_string: Option<String>,
}

/// A named account on the tracker side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Account name.
    pub name: String,
}

/// A commit the tracker links to an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    /// Commit hash.
    pub id: String,

    /// Commit author.
    pub author: Actor,

    /// Author timestamp.
    #[serde(with = "time::instant")]
    pub author_timestamp: DateTime<FixedOffset>,
}

/// Commits linked to one issue, grouped by originating repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryCommits {
    /// Repository reference, carried as an opaque URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Linked commits in repository order.
    #[serde(default)]
    pub commits: Vec<Commit>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decodes_search_issue_ignoring_unknown_fields() {
        let issue: Issue = serde_json::from_value(json!({
            "expand": "changelog",
            "id": "1234",
            "self": "https://jira.test/rest/api/2/issue/1234",
            "key": "TEST-1",
            "fields": {
                "timeestimate": 28800,
                "created": "2017-01-01T00:00:01.000+0000"
            },
            "changelog": {
                "startAt": 0,
                "total": 1,
                "histories": [
                    {
                        "id": "100",
                        "created": "2017-01-04T00:00:01.000+0000",
                        "author": {"name": "developer2", "displayName": "Developer Two"},
                        "items": [
                            {"field": "status", "fromString": "Open", "toString": "In Progress"}
                        ]
                    }
                ]
            }
        }))
        .unwrap();

        assert_eq!(issue.key, "TEST-1");
        assert_eq!(issue.fields.time_estimate, Some(28800));
        assert_eq!(issue.changelog.histories.len(), 1);
        let event = &issue.changelog.histories[0];
        assert_eq!(event.author.as_ref().unwrap().name, "developer2");
        assert_eq!(event.items[0].to_string.as_deref(), Some("In Progress"));
    }

    #[test]
    fn test_missing_changelog_and_estimate_decode_as_absent() {
        let issue: Issue = serde_json::from_value(json!({
            "id": "5678",
            "key": "TEST-2",
            "fields": {"created": "2017-01-02T00:00:01.000+0000"}
        }))
        .unwrap();

        assert_eq!(issue.fields.time_estimate, None);
        assert!(issue.changelog.histories.is_empty());
    }

    #[test]
    fn test_null_transition_values_decode_as_absent() {
        let transition: FieldTransition = serde_json::from_value(json!({
            "field": "status",
            "fromString": null,
            "toString": "Open"
        }))
        .unwrap();

        assert_eq!(transition.from_string, None);
        assert_eq!(transition.to_string.as_deref(), Some("Open"));
    }

    #[test]
    fn test_commit_round_trips_untouched() {
        let raw = json!({
            "id": "39c6ba96cdfc4ce348ca88a13913a0fde3556f07",
            "author": {"name": "developer2"},
            "authorTimestamp": "2017-01-04T00:50:01.000+0000"
        });
        let commit: Commit = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&commit).unwrap(), raw);
    }

    #[test]
    fn test_non_numeric_estimate_is_a_decode_error() {
        let result: Result<IssueFields, _> = serde_json::from_value(json!({
            "created": "2017-01-01T00:00:01.000+0000",
            "timeestimate": "eight hours"
        }));
        assert!(result.is_err());
    }
}
