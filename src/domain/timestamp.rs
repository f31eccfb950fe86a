//! Structured timestamp decoded from the stored start-time column.
//!
//! The store keeps `advertised_start_time` as RFC 3339 text. On read it is
//! decoded into a [`Timestamp`] (seconds since the Unix epoch plus the
//! nanosecond remainder), which is what every record exposes.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Absolute point in time as seconds + nanoseconds since the Unix epoch.
///
/// Ordering compares `seconds` first, then `nanos`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub struct Timestamp {
    /// Whole seconds since `1970-01-01T00:00:00Z`.
    pub seconds: i64,
    /// Sub-second remainder in nanoseconds.
    pub nanos: u32,
}

impl Timestamp {
    /// Creates a timestamp from raw parts.
    #[must_use]
    pub const fn new(seconds: i64, nanos: u32) -> Self {
        Self { seconds, nanos }
    }

    /// Parses an RFC 3339 string (any offset) into a UTC timestamp.
    ///
    /// # Errors
    ///
    /// Returns the [`chrono::ParseError`] when `raw` is not valid RFC 3339.
    pub fn parse_rfc3339(raw: &str) -> Result<Self, chrono::ParseError> {
        let parsed = DateTime::parse_from_rfc3339(raw)?;
        Ok(Self::from(parsed.with_timezone(&Utc)))
    }

    /// Formats the timestamp the way it is persisted: UTC, second precision.
    #[must_use]
    pub fn to_storage_string(&self) -> String {
        DateTime::<Utc>::from_timestamp(self.seconds, self.nanos)
            .unwrap_or_default()
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            seconds: dt.timestamp(),
            nanos: dt.timestamp_subsec_nanos(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanos)
    }
}
