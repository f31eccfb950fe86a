//! Racing service: request validation in front of the race repository.

use std::sync::Arc;

use crate::domain::{OrderParam, Race, RaceFilter};
use crate::error::GatewayError;
use crate::persistence::RaceRepository;

/// Facade over [`RaceRepository`].
///
/// Stateless coordinator: checks request shape, then delegates. Ids that
/// are not positive are rejected here with
/// [`GatewayError::InvalidRequest`]; an id that is well-formed but absent
/// comes back from the repository as [`GatewayError::NotFound`].
#[derive(Debug, Clone)]
pub struct RacingService {
    repo: Arc<RaceRepository>,
}

impl RacingService {
    /// Creates a new `RacingService`.
    #[must_use]
    pub fn new(repo: Arc<RaceRepository>) -> Self {
        Self { repo }
    }

    /// Lists races matching `filter`, ordered per `order`.
    ///
    /// # Errors
    ///
    /// Propagates any repository error unchanged.
    pub async fn list_races(
        &self,
        filter: Option<&RaceFilter>,
        order: Option<&OrderParam>,
    ) -> Result<Vec<Race>, GatewayError> {
        let races = self.repo.list(filter, order).await?;
        tracing::debug!(count = races.len(), "listed races");
        Ok(races)
    }

    /// Fetches a single race.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] if `id` is not positive,
    /// [`GatewayError::NotFound`] if no race has it, or any repository error.
    pub async fn get_race(&self, id: i64) -> Result<Race, GatewayError> {
        if id <= 0 {
            tracing::debug!(id, "rejected race lookup");
            return Err(GatewayError::InvalidRequest(format!(
                "race id must be positive, got {id}"
            )));
        }
        self.repo.get_by_id(id).await
    }
}
