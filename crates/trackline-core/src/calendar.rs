//! Working-hours calendar.
//!
//! Models one repeating daily work window and adds working durations to
//! instants, skipping the hours outside the window.

use chrono::{DateTime, Duration, FixedOffset, Timelike};

use crate::error::{CoreError, Result};

/// Seconds in a calendar day.
const SECONDS_PER_DAY: u32 = 86_400;

/// A repeating daily work window.
///
/// The window covers `[day_end - day_length, day_end)` on every calendar
/// day, both measured in seconds since local midnight. A `day_length` of
/// 86400 models a round-the-clock calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkCalendar {
    /// Working seconds per day.
    day_length: u32,
    /// Seconds since midnight at which the work day ends.
    day_end: u32,
}

impl WorkCalendar {
    /// Create a calendar.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidCalendar` unless
    /// `0 < day_length <= day_end <= 86400` holds.
    pub fn new(day_length: u32, day_end: u32) -> Result<Self> {
        if day_length == 0 || day_length > day_end || day_end > SECONDS_PER_DAY {
            return Err(CoreError::InvalidCalendar {
                day_length,
                day_end,
            });
        }
        Ok(Self {
            day_length,
            day_end,
        })
    }

    /// Seconds since midnight at which the work day starts.
    fn window_start(self) -> Duration {
        Duration::seconds(i64::from(self.day_end - self.day_length))
    }

    /// Seconds since midnight at which the work day ends.
    fn window_end(self) -> Duration {
        Duration::seconds(i64::from(self.day_end))
    }

    /// Add a working duration to `start`, skipping non-working hours.
    ///
    /// A start before the day's window counts from the window opening; a
    /// start at or past the window end counts from the next day's opening.
    /// The skipped idle time consumes none of `duration`. A zero duration
    /// returns `start` unchanged.
    #[must_use]
    pub fn add_work_time(
        self,
        start: DateTime<FixedOffset>,
        duration: Duration,
    ) -> DateTime<FixedOffset> {
        if duration <= Duration::zero() {
            return start;
        }

        let mut position = self.clamp_into_window(start);
        let mut remaining = duration;
        loop {
            let available = self.window_end() - time_of_day(position);
            if remaining <= available {
                return position + remaining;
            }
            remaining = remaining - available;
            position = position - time_of_day(position) + Duration::days(1) + self.window_start();
        }
    }

    /// Move a start instant into the work window it counts from.
    fn clamp_into_window(self, instant: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        let elapsed = time_of_day(instant);
        if elapsed < self.window_start() {
            instant - elapsed + self.window_start()
        } else if elapsed >= self.window_end() {
            instant - elapsed + Duration::days(1) + self.window_start()
        } else {
            instant
        }
    }
}

/// Time elapsed since local midnight, sub-second part included.
fn time_of_day(instant: DateTime<FixedOffset>) -> Duration {
    Duration::seconds(i64::from(instant.num_seconds_from_midnight()))
        + Duration::nanoseconds(i64::from(instant.nanosecond()))
}
