//! Derived open/closed status.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Timestamp;

/// Whether a race or event is still open, derived from its advertised
/// start time at read time. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// The advertised start is now or in the future.
    Open,
    /// The advertised start has passed.
    Closed,
}

impl Status {
    /// Derives the status of something starting at `start`, as seen at `now`.
    ///
    /// Only whole seconds are compared: a start within the current second
    /// is still open.
    #[must_use]
    pub const fn at(start: Timestamp, now: Timestamp) -> Self {
        if now.seconds > start.seconds {
            Self::Closed
        } else {
            Self::Open
        }
    }

    /// Upper-case wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn future_start_is_open() {
        let status = Status::at(Timestamp::new(200, 0), Timestamp::new(100, 0));
        assert_eq!(status, Status::Open);
    }

    #[test]
    fn past_start_is_closed() {
        let status = Status::at(Timestamp::new(100, 0), Timestamp::new(200, 0));
        assert_eq!(status, Status::Closed);
    }

    #[test]
    fn same_second_is_open() {
        let status = Status::at(Timestamp::new(100, 0), Timestamp::new(100, 999_999_999));
        assert_eq!(status, Status::Open);
    }

    #[test]
    fn serializes_upper_case() {
        let Ok(json) = serde_json::to_string(&Status::Closed) else {
            panic!("serialization failed");
        };
        assert_eq!(json, "\"CLOSED\"");
        assert_eq!(Status::Open.to_string(), "OPEN");
    }
}
