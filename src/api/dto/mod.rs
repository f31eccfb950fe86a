//! Data Transfer Objects for REST request/response serialization.
//!
//! Filters, ordering and records are the domain types themselves; the DTOs
//! here only add the request/response envelopes.

pub mod event_dto;
pub mod race_dto;

pub use event_dto::*;
pub use race_dto::*;
