//! Tracker timestamp handling.
//!
//! The tracker writes instants as `2017-01-04T00:00:01.000+0000`:
//! millisecond precision, numeric offset without a colon. All arithmetic
//! keeps the offset an instant arrived with, and rendering reproduces the
//! wire format byte for byte so re-encoded values compare textually.

use chrono::{DateTime, FixedOffset};

/// Wire format the tracker uses for instants.
pub const TRACKER_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Parse a tracker instant.
///
/// Accepts the tracker wire format with any sub-second precision, and
/// falls back to RFC 3339 for `Z`-suffixed inputs.
///
/// # Errors
/// Returns the underlying parse error when neither form matches.
pub fn parse(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z")
        .or_else(|_| DateTime::parse_from_rfc3339(value))
}

/// Render an instant in the tracker wire format.
#[must_use]
pub fn format(instant: &DateTime<FixedOffset>) -> String {
    instant.format(TRACKER_FORMAT).to_string()
}

/// Serde adapter for required tracker instants.
pub mod instant {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(instant: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format(instant))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        super::parse(&value).map_err(de::Error::custom)
    }
}

/// Serde adapter for optional tracker instants.
pub mod instant_opt {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(
        instant: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match instant {
            Some(instant) => serializer.serialize_str(&super::format(instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        value
            .as_deref()
            .map(super::parse)
            .transpose()
            .map_err(de::Error::custom)
    }
}
