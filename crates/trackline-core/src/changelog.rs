//! Status-changelog scanning.
//!
//! Recovers when an issue entered its started and resolved statuses, and
//! who moved it into the started status, from the tracker's changelog.

use chrono::{DateTime, FixedOffset};

use crate::issue::ChangeEvent;

/// Default status marking the start of work.
pub const STARTED_STATUS: &str = "In Progress";

/// Default status marking completion.
pub const RESOLVED_STATUS: &str = "Resolved";

/// The pair of status labels a changelog scan looks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLabels {
    /// Transition target that starts the clock.
    pub started: String,
    /// Transition target that stops it.
    pub resolved: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            started: STARTED_STATUS.to_string(),
            resolved: RESOLVED_STATUS.to_string(),
        }
    }
}

/// Lifecycle instants recovered from a changelog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusTimings {
    /// When the issue last entered the started status.
    pub started: Option<DateTime<FixedOffset>>,

    /// Who moved it there, when the changelog names an author.
    pub started_by: Option<String>,

    /// When the issue last entered the resolved status.
    pub completed: Option<DateTime<FixedOffset>>,
}

/// Scan a changelog for the instants an issue entered the given statuses.
///
/// Events are taken in the order supplied; when a status is entered more
/// than once the latest entry wins. The two statuses are tracked
/// independently, so a recorded resolution counts even without a recorded
/// start. Transitions match on their target value alone.
#[must_use]
pub fn scan_changelog(events: &[ChangeEvent], labels: &StatusLabels) -> StatusTimings {
    let mut timings = StatusTimings::default();

    for event in events {
        for item in &event.items {
            let Some(target) = item.to_string.as_deref() else {
                continue;
            };
            if target == labels.started {
                timings.started = Some(event.created);
                timings.started_by = event.author.as_ref().map(|author| author.name.clone());
            }
            if target == labels.resolved {
                timings.completed = Some(event.created);
            }
        }
    }

    timings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{Actor, FieldTransition};
    use crate::time;
    use pretty_assertions::assert_eq;

    fn ts(value: &str) -> DateTime<FixedOffset> {
        time::parse(value).unwrap()
    }

    fn status_change(created: &str, author: Option<&str>, to: &str) -> ChangeEvent {
        ChangeEvent {
            created: ts(created),
            author: author.map(|name| Actor {
                name: name.to_string(),
            }),
            items: vec![FieldTransition {
                field: "status".to_string(),
                from_string: None,
                to_string: Some(to.to_string()),
            }],
        }
    }

    #[test]
    fn test_recovers_start_and_completion() {
        let events = vec![
            status_change("2017-01-04T00:00:01.000+0000", Some("developer2"), "In Progress"),
            status_change("2017-01-04T01:00:01.000+0000", Some("developer2"), "In Review"),
            status_change("2017-01-04T02:00:01.000+0000", Some("developer1"), "Resolved"),
            status_change("2017-01-04T03:00:01.000+0000", Some("tester1"), "Closed"),
        ];

        let timings = scan_changelog(&events, &StatusLabels::default());

        assert_eq!(timings.started, Some(ts("2017-01-04T00:00:01.000+0000")));
        assert_eq!(timings.started_by.as_deref(), Some("developer2"));
        assert_eq!(timings.completed, Some(ts("2017-01-04T02:00:01.000+0000")));
    }

    #[test]
    fn test_latest_entry_wins_when_status_is_revisited() {
        let events = vec![
            status_change("2017-01-02T09:00:00.000+0000", Some("developer1"), "In Progress"),
            status_change("2017-01-02T12:00:00.000+0000", Some("developer1"), "Resolved"),
            status_change("2017-01-03T09:00:00.000+0000", Some("tester1"), "Reopened"),
            status_change("2017-01-03T10:00:00.000+0000", Some("developer2"), "In Progress"),
            status_change("2017-01-03T15:00:00.000+0000", Some("developer2"), "Resolved"),
        ];

        let timings = scan_changelog(&events, &StatusLabels::default());

        assert_eq!(timings.started, Some(ts("2017-01-03T10:00:00.000+0000")));
        assert_eq!(timings.started_by.as_deref(), Some("developer2"));
        assert_eq!(timings.completed, Some(ts("2017-01-03T15:00:00.000+0000")));
    }

    #[test]
    fn test_statuses_are_tracked_independently() {
        let events = vec![status_change(
            "2017-01-02T12:00:00.000+0000",
            Some("developer1"),
            "Resolved",
        )];

        let timings = scan_changelog(&events, &StatusLabels::default());

        assert_eq!(timings.started, None);
        assert_eq!(timings.started_by, None);
        assert_eq!(timings.completed, Some(ts("2017-01-02T12:00:00.000+0000")));
    }

    #[test]
    fn test_anonymous_start_leaves_actor_absent() {
        let events = vec![status_change("2017-01-02T09:00:00.000+0000", None, "In Progress")];

        let timings = scan_changelog(&events, &StatusLabels::default());

        assert_eq!(timings.started, Some(ts("2017-01-02T09:00:00.000+0000")));
        assert_eq!(timings.started_by, None);
    }

    #[test]
    fn test_matches_target_value_whatever_the_field() {
        let events = vec![ChangeEvent {
            created: ts("2017-01-02T09:00:00.000+0000"),
            author: None,
            items: vec![FieldTransition {
                field: "customfield_10100".to_string(),
                from_string: None,
                to_string: Some("In Progress".to_string()),
            }],
        }];

        let timings = scan_changelog(&events, &StatusLabels::default());

        assert_eq!(timings.started, Some(ts("2017-01-02T09:00:00.000+0000")));
    }

    #[test]
    fn test_custom_labels() {
        let labels = StatusLabels {
            started: "Doing".to_string(),
            resolved: "Done".to_string(),
        };
        let events = vec![
            status_change("2017-01-02T09:00:00.000+0000", Some("developer1"), "Doing"),
            status_change("2017-01-02T17:00:00.000+0000", Some("developer1"), "Done"),
        ];

        let timings = scan_changelog(&events, &labels);

        assert_eq!(timings.started, Some(ts("2017-01-02T09:00:00.000+0000")));
        assert_eq!(timings.completed, Some(ts("2017-01-02T17:00:00.000+0000")));
    }

    #[test]
    fn test_empty_changelog_yields_nothing() {
        assert_eq!(
            scan_changelog(&[], &StatusLabels::default()),
            StatusTimings::default()
        );
    }
}
