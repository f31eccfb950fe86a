//! # racing-gateway
//!
//! REST gateway for two read-only query services: races and sports
//! events. Both are backed by SQLite and share one generic repository that
//! builds parameterized list queries from optional filters and ordering,
//! and derives each record's OPEN/CLOSED status at read time.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── RacingService / SportsService (service/)
//!     │
//!     ├── Repository<Races> / Repository<SportEvents> (persistence/)
//!     │       query builder → SQLite → materializer
//!     │
//!     └── SQLite
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
