//! Schema creation and demo data.
//!
//! Seeding writes ids `1..=SEED_ROWS` with `INSERT OR IGNORE`, so running
//! it against an already seeded database adds nothing.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use sqlx::SqlitePool;

use super::kind::EntityKind;
use super::query::SqlArg;
use crate::domain::Timestamp;
use crate::error::GatewayError;

/// Rows seeded per table.
pub const SEED_ROWS: i64 = 100;

/// Start times are spread from one day before seeding...
const WINDOW_PAST_SECS: i64 = 24 * 60 * 60;
/// ...to two days after.
const WINDOW_FUTURE_SECS: i64 = 2 * 24 * 60 * 60;

pub(crate) const PLACES: &[&str] = &[
    "Ballarat",
    "Bendigo",
    "Brisbane",
    "Canberra",
    "Darwin",
    "Geelong",
    "Hobart",
    "Melbourne",
    "Perth",
    "Sydney",
    "Townsville",
    "Wagga",
];

pub(crate) const MASCOTS: &[&str] = &[
    "bulldogs", "cobras", "dragons", "eagles", "falcons", "hawks", "lions", "magpies", "panthers",
    "rams", "sharks", "tigers",
];

pub(crate) const SPORTS: &[&str] = &[
    "Basketball",
    "Cricket",
    "Football",
    "Netball",
    "Rugby",
    "Soccer",
    "Tennis",
];

/// `INSERT OR IGNORE` statement covering every column of `K`.
#[must_use]
pub fn insert_statement<K: EntityKind>() -> String {
    let placeholders = vec!["?"; K::COLUMNS.len()].join(", ");
    format!(
        "INSERT OR IGNORE INTO {} ({}) VALUES ({placeholders})",
        K::TABLE,
        K::COLUMNS.join(", "),
    )
}

/// Generates the argument lists for all seed rows.
pub fn seed_rows<K: EntityKind, R: Rng>(now: DateTime<Utc>, rng: &mut R) -> Vec<Vec<SqlArg>> {
    (1..=SEED_ROWS)
        .map(|id| {
            let offset = rng.random_range(-WINDOW_PAST_SECS..=WINDOW_FUTURE_SECS);
            let start = Timestamp::from(now + Duration::seconds(offset));
            K::seed_values(id, start.to_storage_string(), rng)
        })
        .collect()
}

/// Creates the table for `K` and inserts the seed rows in one transaction.
///
/// # Errors
///
/// Returns [`GatewayError::Database`] if any statement fails; the
/// transaction is rolled back on drop.
pub async fn seed<K: EntityKind>(pool: &SqlitePool) -> Result<(), GatewayError> {
    let rows = {
        let mut rng = rand::rng();
        seed_rows::<K, _>(Utc::now(), &mut rng)
    };
    let insert = insert_statement::<K>();

    let mut tx = pool.begin().await?;
    sqlx::query(K::CREATE_TABLE).execute(&mut *tx).await?;
    for args in rows {
        let mut query = sqlx::query(&insert);
        for arg in args {
            query = arg.bind_to(query);
        }
        query.execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::info!(table = K::TABLE, rows = SEED_ROWS, "seeded table");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::races::Races;
    use crate::persistence::sports::SportEvents;

    #[test]
    fn insert_statement_lists_every_column() {
        assert_eq!(
            insert_statement::<Races>(),
            "INSERT OR IGNORE INTO races (id, meeting_id, name, visible, advertised_start_time) \
             VALUES (?, ?, ?, ?, ?)"
        );
    }

    #[test]
    fn seed_rows_have_sequential_ids() {
        let mut rng = rand::rng();
        let rows = seed_rows::<SportEvents, _>(Utc::now(), &mut rng);
        assert_eq!(rows.len(), 100);
        for (index, row) in rows.iter().enumerate() {
            let expected = i64::try_from(index).unwrap_or_default() + 1;
            assert_eq!(row.first(), Some(&SqlArg::Int(expected)));
        }
    }

    #[test]
    fn seed_start_times_stay_in_window() {
        let now = Utc::now();
        let mut rng = rand::rng();
        let earliest = Timestamp::from(now - Duration::seconds(WINDOW_PAST_SECS + 1));
        let latest = Timestamp::from(now + Duration::seconds(WINDOW_FUTURE_SECS + 1));
        for row in seed_rows::<Races, _>(now, &mut rng) {
            let Some(SqlArg::Text(raw)) = row.last() else {
                panic!("start time is the last column");
            };
            let Ok(start) = Timestamp::parse_rfc3339(raw) else {
                panic!("seeded start time must parse: {raw}");
            };
            assert!(start >= earliest && start <= latest, "{raw} outside window");
        }
    }
}
