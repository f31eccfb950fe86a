//! Race records and the race list filter.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Status, Timestamp};

/// A single race as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Race {
    /// Primary key.
    pub id: i64,
    /// Meeting this race belongs to.
    pub meeting_id: i64,
    /// Display name.
    pub name: String,
    /// Whether the race is shown to customers.
    pub visible: bool,
    /// Scheduled start.
    pub advertised_start_time: Timestamp,
    /// Derived from `advertised_start_time` at read time.
    pub status: Status,
}

/// Optional predicates narrowing a race listing. All present predicates
/// must hold; an empty set counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RaceFilter {
    /// Only races whose id is in this set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<i64>,
    /// Only races belonging to one of these meetings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meeting_ids: Vec<i64>,
    /// Only races whose name contains this substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Only races with this visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl RaceFilter {
    /// Filter matching exactly one race id.
    #[must_use]
    pub fn by_id(id: i64) -> Self {
        Self {
            ids: vec![id],
            ..Self::default()
        }
    }
}
