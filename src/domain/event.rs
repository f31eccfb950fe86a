//! Sports event records and the event list filter.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Status, Timestamp};

/// A single sports event as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Primary key.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Sport category.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Venue city.
    pub location: String,
    /// Whether the event is shown to customers.
    pub visible: bool,
    /// Scheduled start.
    pub advertised_start_time: Timestamp,
    /// Derived from `advertised_start_time` at read time.
    pub status: Status,
}

/// Optional predicates narrowing an event listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventFilter {
    /// Only events whose id is in this set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<i64>,
    /// Only events whose name contains this substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Only events of exactly this type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Only events at exactly this location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Only events with this visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}
