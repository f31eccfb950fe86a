//! Sports service: thin facade over the event repository.

use std::sync::Arc;

use crate::domain::{Event, EventFilter, OrderParam};
use crate::error::GatewayError;
use crate::persistence::EventRepository;

/// Facade over [`EventRepository`].
#[derive(Debug, Clone)]
pub struct SportsService {
    repo: Arc<EventRepository>,
}

impl SportsService {
    /// Creates a new `SportsService`.
    #[must_use]
    pub fn new(repo: Arc<EventRepository>) -> Self {
        Self { repo }
    }

    /// Lists sports events matching `filter`, ordered per `order`.
    ///
    /// # Errors
    ///
    /// Propagates any repository error unchanged.
    pub async fn list_events(
        &self,
        filter: Option<&EventFilter>,
        order: Option<&OrderParam>,
    ) -> Result<Vec<Event>, GatewayError> {
        let events = self.repo.list(filter, order).await?;
        tracing::debug!(count = events.len(), "listed events");
        Ok(events)
    }
}
