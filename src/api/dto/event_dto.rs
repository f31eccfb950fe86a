//! Sports event request and response envelopes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Event, EventFilter, OrderParam};

/// Request body for `POST /list-events`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ListEventsRequest {
    /// Optional predicates; absent means every event.
    #[serde(default)]
    pub filter: Option<EventFilter>,
    /// Optional ordering; absent means by advertised start time.
    #[serde(default)]
    pub order: Option<OrderParam>,
}

/// Response body for `POST /list-events`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListEventsResponse {
    /// Matching events in query order.
    pub events: Vec<Event>,
}
