//! Persistence layer: SQLite-backed read repositories.
//!
//! One generic [`Repository`] serves every entity kind. A kind is a
//! zero-sized descriptor implementing [`EntityKind`] ([`Races`],
//! [`SportEvents`]) that names its table, columns, ORDER BY whitelist and
//! row decoding. Query text is assembled in [`query`], rows are turned into
//! records in [`materialize`].

pub mod kind;
pub mod materialize;
pub mod query;
pub mod races;
pub mod repository;
pub mod seed;
pub mod sports;
pub mod sqlite;

pub use kind::EntityKind;
pub use races::Races;
pub use repository::Repository;
pub use sports::SportEvents;

/// Repository over the `races` table.
pub type RaceRepository = Repository<Races>;

/// Repository over the `sport_events` table.
pub type EventRepository = Repository<SportEvents>;
