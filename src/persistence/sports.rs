//! `sport_events` table descriptor.

use rand::Rng;
use rand::seq::IndexedRandom;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::kind::{EntityKind, START_TIME_COLUMN};
use super::query::{Predicate, SqlArg};
use super::seed::{MASCOTS, PLACES, SPORTS};
use crate::domain::{Event, EventFilter, Status, Timestamp};

/// Marker for the sports event kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct SportEvents;

impl EntityKind for SportEvents {
    type Record = Event;
    type Filter = EventFilter;

    const NAME: &'static str = "event";
    const TABLE: &'static str = "sport_events";
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "type", "location", "visible", START_TIME_COLUMN];
    const ORDER_COLUMNS: &'static [&'static str] = &["id", "name", "type", START_TIME_COLUMN];
    const CREATE_TABLE: &'static str = "CREATE TABLE IF NOT EXISTS sport_events (\
        id INTEGER PRIMARY KEY, \
        name TEXT, \
        type TEXT, \
        location TEXT, \
        visible INTEGER, \
        advertised_start_time DATETIME)";

    fn predicates(filter: &EventFilter) -> Vec<Predicate> {
        let mut predicates = Vec::new();
        if !filter.ids.is_empty() {
            predicates.push(Predicate::In {
                column: "id",
                values: filter.ids.clone(),
            });
        }
        if let Some(name) = &filter.name {
            predicates.push(Predicate::Contains {
                column: "name",
                needle: name.clone(),
            });
        }
        if let Some(event_type) = &filter.event_type {
            predicates.push(Predicate::Equals {
                column: "type",
                value: SqlArg::Text(event_type.clone()),
            });
        }
        if let Some(location) = &filter.location {
            predicates.push(Predicate::Equals {
                column: "location",
                value: SqlArg::Text(location.clone()),
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
    ) -> Result<Event, sqlx::Error> {
        Ok(Event {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            event_type: row.try_get("type")?,
            location: row.try_get("location")?,
            visible: row.try_get::<i64, _>("visible")? != 0,
            advertised_start_time,
            status,
        })
    }

    fn seed_values<R: Rng>(id: i64, advertised_start: String, rng: &mut R) -> Vec<SqlArg> {
        let home = PLACES.choose(rng).copied().unwrap_or("Perth");
        let mascot = MASCOTS.choose(rng).copied().unwrap_or("eagles");
        let sport = SPORTS.choose(rng).copied().unwrap_or("Soccer");
        let venue = PLACES.choose(rng).copied().unwrap_or(home);
        vec![
            SqlArg::Int(id),
            SqlArg::Text(format!("{home} {mascot}")),
            SqlArg::Text(sport.to_string()),
            SqlArg::Text(venue.to_string()),
            SqlArg::Bool(rng.random_bool(0.5)),
            SqlArg::Text(advertised_start),
        ]
    }
}
