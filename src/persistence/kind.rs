//! Entity-kind descriptor shared by the generic repository.

use rand::Rng;
use sqlx::sqlite::SqliteRow;

use super::query::{Predicate, SqlArg};
use crate::domain::{Status, Timestamp};

/// Column holding the stored RFC 3339 start time. Every kind has it and it
/// is the default sort column.
pub const START_TIME_COLUMN: &str = "advertised_start_time";

/// Everything the generic repository needs to know about one table.
///
/// Implementors are zero-sized markers such as
/// [`Races`](super::races::Races).
pub trait EntityKind: Send + Sync + 'static {
    /// Materialized record type.
    type Record: Send;
    /// Caller-facing filter type.
    type Filter: Send + Sync;

    /// Singular name used in errors and logs, e.g. `"race"`.
    const NAME: &'static str;
    /// Table name.
    const TABLE: &'static str;
    /// Selected columns, in insert order. Must end with
    /// [`START_TIME_COLUMN`].
    const COLUMNS: &'static [&'static str];
    /// Columns callers may order by.
    const ORDER_COLUMNS: &'static [&'static str];
    /// Column used when the caller names none.
    const DEFAULT_ORDER_COLUMN: &'static str = START_TIME_COLUMN;
    /// `CREATE TABLE IF NOT EXISTS` statement.
    const CREATE_TABLE: &'static str;

    /// Translates a filter into query predicates.
    fn predicates(filter: &Self::Filter) -> Vec<Predicate>;

    /// Builds a record from a row whose start time has already been decoded.
    ///
    /// # Errors
    ///
    /// Returns the driver error if a column is missing or has the wrong type.
    fn decode_row(
        row: &SqliteRow,
        advertised_start_time: Timestamp,
        status: Status,
    ) -> Result<Self::Record, sqlx::Error>;

    /// Random seed values for row `id`, one per entry of
    /// [`COLUMNS`](Self::COLUMNS).
    fn seed_values<R: Rng>(id: i64, advertised_start: String, rng: &mut R) -> Vec<SqlArg>;
}
