//! `races` table descriptor.

use rand::Rng;
use rand::seq::IndexedRandom;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::kind::{EntityKind, START_TIME_COLUMN};
use super::query::{Predicate, SqlArg};
use super::seed::{MASCOTS, PLACES};
use crate::domain::{Race, RaceFilter, Status, Timestamp};

/// Marker for the race kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct Races;

/// Highest meeting id handed out by the seeder.
const SEED_MEETINGS: i64 = 10;

impl EntityKind for Races {
    type Record = Race;
    type Filter = RaceFilter;

    const NAME: &'static str = "race";
    const TABLE: &'static str = "races";
    const COLUMNS: &'static [&'static str] =
        &["id", "meeting_id", "name", "visible", START_TIME_COLUMN];
    const ORDER_COLUMNS: &'static [&'static str] =
        &["id", "meeting_id", "name", START_TIME_COLUMN];
    const CREATE_TABLE: &'static str = "CREATE TABLE IF NOT EXISTS races (\
        id INTEGER PRIMARY KEY, \
        meeting_id INTEGER, \
        name TEXT, \
        visible INTEGER, \
        advertised_start_time DATETIME)";

    fn predicates(filter: &RaceFilter) -> Vec<Predicate> {
        let mut predicates = Vec::new();
        if !filter.ids.is_empty() {
            predicates.push(Predicate::In {
                column: "id",
                values: filter.ids.clone(),
            });
        }
        if !filter.meeting_ids.is_empty() {
            predicates.push(Predicate::In {
                column: "meeting_id",
                values: filter.meeting_ids.clone(),
            });
        }
        if let Some(name) = &filter.name {
            predicates.push(Predicate::Contains {
                column: "name",
                needle: name.clone(),
            });
        }
        if let Some(visible) = filter.visible {
            predicates.push(Predicate::Equals {
                column: "visible",
                value: SqlArg::Bool(visible),
            });
        }
        predicates
    }

    fn decode_row(
        row: &SqliteRow,
        advertised_start_time: Timestamp,
        status: Status,
    ) -> Result<Race, sqlx::Error> {
        Ok(Race {
            id: row.try_get("id")?,
            meeting_id: row.try_get("meeting_id")?,
            name: row.try_get("name")?,
            visible: row.try_get::<i64, _>("visible")? != 0,
            advertised_start_time,
            status,
        })
    }

    fn seed_values<R: Rng>(id: i64, advertised_start: String, rng: &mut R) -> Vec<SqlArg> {
        let place = PLACES.choose(rng).copied().unwrap_or("Flemington");
        let mascot = MASCOTS.choose(rng).copied().unwrap_or("hawks");
        vec![
            SqlArg::Int(id),
            SqlArg::Int(rng.random_range(1..=SEED_MEETINGS)),
            SqlArg::Text(format!("{place} {mascot}")),
            SqlArg::Bool(rng.random_bool(0.5)),
            SqlArg::Text(advertised_start),
        ]
    }
}
