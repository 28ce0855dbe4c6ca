//! Error types for trackline-core.

use thiserror::Error;

/// Result type alias for trackline-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur in trackline-core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Work calendar configuration outside `0 < day_length <= day_end <= 86400`.
    #[error("invalid work calendar: day_length={day_length}s, day_end={day_end}s (need 0 < day_length <= day_end <= 86400)")]
    InvalidCalendar { day_length: u32, day_end: u32 },
}
