//! Race request and response envelopes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{OrderParam, Race, RaceFilter};

/// Request body for `POST /list-races`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ListRacesRequest {
    /// Optional predicates; absent means every race.
    #[serde(default)]
    pub filter: Option<RaceFilter>,
    /// Optional ordering; absent means by advertised start time.
    #[serde(default)]
    pub order: Option<OrderParam>,
}

/// Response body for `POST /list-races`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListRacesResponse {
    /// Matching races in query order.
    pub races: Vec<Race>,
}
