//! Caller-supplied ordering.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Optional `(field, direction)` pair controlling result order.
///
/// Both parts are free text from the caller. The repository only honours a
/// `field` that matches its column whitelist and a `direction` of `ASC` or
/// `DESC` (any case); anything else degrades silently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderParam {
    /// Column to order by. `None` selects the default start-time column.
    #[serde(default)]
    pub field: Option<String>,
    /// `ASC` or `DESC`, case-insensitive.
    #[serde(default)]
    pub direction: Option<String>,
}

impl OrderParam {
    /// Orders by `field` with no explicit direction.
    #[must_use]
    pub fn by(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            direction: None,
        }
    }

    /// Sets the direction.
    #[must_use]
    pub fn direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }
}
