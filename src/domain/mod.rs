//! Domain layer: records, filters, ordering and the derived status.
//!
//! These types are what the repository returns and what the service
//! facade accepts. They carry no SQL; translation into query predicates
//! lives in [`crate::persistence`].

pub mod event;
pub mod order;
pub mod race;
pub mod status;
pub mod timestamp;

pub use event::{Event, EventFilter};
pub use order::OrderParam;
pub use race::{Race, RaceFilter};
pub use status::Status;
pub use timestamp::Timestamp;
