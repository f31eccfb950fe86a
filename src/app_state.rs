//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::{RacingService, SportsService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Race listing and lookup.
    pub racing_service: Arc<RacingService>,
    /// Sports event listing.
    pub sports_service: Arc<SportsService>,
}
