//! Estimated-completion projection.

use chrono::{DateTime, Duration, FixedOffset};

use crate::calendar::WorkCalendar;

/// Projects a recorded estimate into an expected completion instant on a
/// work calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimateProjector {
    calendar: WorkCalendar,
}

impl EstimateProjector {
    /// Create a projector over the given calendar.
    #[must_use]
    pub const fn new(calendar: WorkCalendar) -> Self {
        Self { calendar }
    }

    /// Expected completion for work started at `started` with
    /// `estimate_seconds` of estimated effort.
    ///
    /// Absent when the issue never started or carries no usable estimate;
    /// a zero estimate counts as no estimate.
    #[must_use]
    pub fn project(
        self,
        started: Option<DateTime<FixedOffset>>,
        estimate_seconds: Option<u32>,
    ) -> Option<DateTime<FixedOffset>> {
        let started = started?;
        let seconds = estimate_seconds.filter(|&seconds| seconds > 0)?;
        Some(
            self.calendar
                .add_work_time(started, Duration::seconds(i64::from(seconds))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time;
    use pretty_assertions::assert_eq;

    fn projector() -> EstimateProjector {
        EstimateProjector::new(WorkCalendar::new(28_800, 28_800).unwrap())
    }

    fn ts(value: &str) -> DateTime<FixedOffset> {
        time::parse(value).unwrap()
    }

    #[test]
    fn test_projects_on_the_calendar() {
        let completion = projector().project(
            Some(ts("2017-01-04T00:00:01.000+0000")),
            Some(28_800),
        );
        assert_eq!(completion, Some(ts("2017-01-05T00:00:01.000+0000")));
    }

    #[test]
    fn test_unstarted_work_has_no_projection() {
        assert_eq!(projector().project(None, Some(28_800)), None);
    }

    #[test]
    fn test_missing_estimate_has_no_projection() {
        assert_eq!(
            projector().project(Some(ts("2017-01-04T00:00:01.000+0000")), None),
            None
        );
    }

    #[test]
    fn test_zero_estimate_counts_as_missing() {
        assert_eq!(
            projector().project(Some(ts("2017-01-04T00:00:01.000+0000")), Some(0)),
            None
        );
    }
}
