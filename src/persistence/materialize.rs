//! Row materialization: result rows to typed, status-augmented records.

use futures_util::{Stream, TryStreamExt};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::kind::{EntityKind, START_TIME_COLUMN};
use crate::domain::{Status, Timestamp};
use crate::error::GatewayError;

/// Decodes one row into a `K::Record`, deriving its status against `now`.
///
/// # Errors
///
/// Returns [`GatewayError::Decode`] if the stored start time is not RFC 3339
/// and [`GatewayError::Database`] if any other column fails to decode.
pub fn materialize_row<K: EntityKind>(
    row: &SqliteRow,
    now: Timestamp,
) -> Result<K::Record, GatewayError> {
    let raw: String = row.try_get(START_TIME_COLUMN)?;
    let start = match Timestamp::parse_rfc3339(&raw) {
        Ok(start) => start,
        Err(source) => {
            return Err(GatewayError::Decode {
                column: START_TIME_COLUMN,
                value: raw,
                source,
            });
        }
    };
    Ok(K::decode_row(row, start, Status::at(start, now))?)
}

/// Drains `rows` into records, preserving their order.
///
/// Every row is compared against the same `now`. An exhausted or
/// "no rows" stream yields an empty vector.
///
/// # Errors
///
/// Stops at the first failing row and returns its error; no partial result
/// is returned.
pub async fn materialize<K, S>(mut rows: S, now: Timestamp) -> Result<Vec<K::Record>, GatewayError>
where
    K: EntityKind,
    S: Stream<Item = Result<SqliteRow, sqlx::Error>> + Unpin,
{
    let mut records = Vec::new();
    loop {
        match rows.try_next().await {
            Ok(Some(row)) => records.push(materialize_row::<K>(&row, now)?),
            Ok(None) => return Ok(records),
            Err(sqlx::Error::RowNotFound) => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        }
    }
}
