//! Service layer: request validation and delegation.
//!
//! [`RacingService`] and [`SportsService`] sit between the HTTP handlers
//! and the repositories in [`super::persistence`].

pub mod racing_service;
pub mod sports_service;

pub use racing_service::RacingService;
pub use sports_service::SportsService;
