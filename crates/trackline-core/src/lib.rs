//! trackline-core: the history reconciliation engine.
//!
//! This crate joins an issue's status changelog with the commits the
//! tracker links to it, recovering a per-issue timeline:
//! - `WorkCalendar`: working-hours arithmetic for estimate projection
//! - `scan_changelog`: start/completion instants from status transitions
//! - `attribute_resource`: the contributor held responsible for the work
//! - `ChartBuilder`: the assembled, deterministically ordered chart
//!
//! I/O stays outside: callers supply issues and per-issue commit groups,
//! and the first collaborator failure aborts a build unchanged.

pub mod calendar;
pub mod changelog;
pub mod chart;
pub mod error;
pub mod estimate;
pub mod issue;
pub mod resource;
pub mod time;

pub use calendar::WorkCalendar;
pub use changelog::{RESOLVED_STATUS, STARTED_STATUS, StatusLabels, StatusTimings, scan_changelog};
pub use chart::{ChartBuilder, ChartEntry, ChartIssue, sort_chart};
pub use error::{CoreError, Result};
pub use estimate::EstimateProjector;
pub use issue::{
    Actor, ChangeEvent, Changelog, Commit, FieldTransition, Issue, IssueFields, RepositoryCommits,
};
pub use resource::attribute_resource;
