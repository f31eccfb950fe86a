//! Generic read-only repository over one entity kind.
//!
//! [`Repository`] wires the pieces together: build the list query for the
//! kind, run it on the shared [`SqlitePool`], materialize the row stream.
//! It also owns the one-time schema/seed initialization.

use std::marker::PhantomData;
use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;
use tokio::sync::OnceCell;

use super::kind::EntityKind;
use super::materialize::materialize;
use super::query::{ListQuery, build_list_query};
use super::races::Races;
use super::seed::seed;
use crate::domain::{OrderParam, Race, RaceFilter, Timestamp};
use crate::error::GatewayError;

/// Read-only access to the table described by `K`.
///
/// # Concurrency
///
/// Any number of `list` calls may run at once; SQLite provides isolation.
/// `init` runs its body at most once per repository, concurrent first
/// callers wait for that single run, and every caller sees its outcome.
#[derive(Debug)]
pub struct Repository<K: EntityKind> {
    pool: SqlitePool,
    init: OnceCell<Result<(), Arc<GatewayError>>>,
    kind: PhantomData<fn() -> K>,
}

impl<K: EntityKind> Repository<K> {
    /// Creates a repository over `pool`. Nothing touches the database until
    /// [`init`](Self::init) or [`list`](Self::list) is called.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            init: OnceCell::new(),
            kind: PhantomData,
        }
    }

    /// Creates the table and seeds demo rows, once.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InitFailed`] wrapping the first run's error.
    /// A failed initialization is not retried.
    pub async fn init(&self) -> Result<(), GatewayError> {
        let outcome = self
            .init
            .get_or_init(|| async {
                tracing::info!(table = K::TABLE, "initializing repository");
                seed::<K>(&self.pool).await.map_err(Arc::new)
            })
            .await;
        outcome.clone().map_err(GatewayError::InitFailed)
    }

    /// Lists records matching `filter`, ordered per `order`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Database`] if the query fails and
    /// [`GatewayError::Decode`] if a stored start time is malformed.
    pub async fn list(
        &self,
        filter: Option<&K::Filter>,
        order: Option<&OrderParam>,
    ) -> Result<Vec<K::Record>, GatewayError> {
        let ListQuery { sql, args } = build_list_query::<K>(filter, order);
        tracing::debug!(table = K::TABLE, %sql, args = args.len(), "running list query");

        let mut query = sqlx::query(&sql);
        for arg in args {
            query = arg.bind_to(query);
        }

        let now = Timestamp::from(Utc::now());
        materialize::<K, _>(query.fetch(&self.pool), now).await
    }
}

impl Repository<Races> {
    /// Fetches one race by id.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] if `id` is not positive or no race
    /// has it, and any error [`list`](Self::list) can return.
    pub async fn get_by_id(&self, id: i64) -> Result<Race, GatewayError> {
        let not_found = || GatewayError::NotFound {
            kind: <Races as EntityKind>::NAME,
            id,
        };
        if id <= 0 {
            return Err(not_found());
        }

        self.list(Some(&RaceFilter::by_id(id)), None)
            .await?
            .into_iter()
            .next()
            .ok_or_else(not_found)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use futures_util::future::join_all;

    use super::*;
    use crate::domain::{Event, EventFilter, Status};
    use crate::persistence::sports::SportEvents;
    use crate::persistence::sqlite::open_in_memory;

    async fn seeded<K: EntityKind>() -> Repository<K> {
        let Ok(pool) = open_in_memory().await else {
            panic!("in-memory sqlite");
        };
        let repo = Repository::<K>::new(pool);
        tokio_test::assert_ok!(repo.init().await);
        repo
    }

    async fn list_races(
        repo: &Repository<Races>,
        filter: Option<&RaceFilter>,
        order: Option<&OrderParam>,
    ) -> Vec<Race> {
        match repo.list(filter, order).await {
            Ok(races) => races,
            Err(e) => panic!("list races failed: {e}"),
        }
    }

    async fn list_events(
        repo: &Repository<SportEvents>,
        filter: Option<&EventFilter>,
        order: Option<&OrderParam>,
    ) -> Vec<Event> {
        match repo.list(filter, order).await {
            Ok(events) => events,
            Err(e) => panic!("list events failed: {e}"),
        }
    }

    fn assert_monotonic<T: PartialOrd + std::fmt::Debug>(values: &[T], direction: &str) {
        for pair in values.windows(2) {
            let [a, b] = pair else { continue };
            if direction == "ASC" {
                assert!(a <= b, "{a:?} then {b:?} is not ascending");
            } else {
                assert!(a >= b, "{a:?} then {b:?} is not descending");
            }
        }
    }

    #[tokio::test]
    async fn list_all_returns_every_seeded_race() {
        let repo = seeded::<Races>().await;
        let races = list_races(&repo, None, None).await;
        assert_eq!(races.len(), 100);

        let unconstrained = list_races(
            &repo,
            Some(&RaceFilter::default()),
            Some(&OrderParam::default()),
        )
        .await;
        assert_eq!(unconstrained.len(), 100);
    }

    #[tokio::test]
    async fn default_order_is_by_start_time() {
        let repo = seeded::<Races>().await;
        let starts: Vec<Timestamp> = list_races(&repo, None, None)
            .await
            .iter()
            .map(|r| r.advertised_start_time)
            .collect();
        assert_monotonic(&starts, "ASC");
    }

    #[tokio::test]
    async fn filters_by_meeting_ids() {
        let repo = seeded::<Races>().await;
        let meeting_ids = vec![2, 3, 5, 7, 11, 13];
        let filter = RaceFilter {
            meeting_ids: meeting_ids.clone(),
            ..RaceFilter::default()
        };
        for race in list_races(&repo, Some(&filter), None).await {
            assert!(meeting_ids.contains(&race.meeting_id), "unexpected {race:?}");
        }
    }

    #[tokio::test]
    async fn filters_by_id_set() {
        let repo = seeded::<Races>().await;
        let ids = vec![2, 3, 5, 7, 11, 13];
        let filter = RaceFilter {
            ids: ids.clone(),
            ..RaceFilter::default()
        };
        let races = list_races(&repo, Some(&filter), Some(&OrderParam::by("id"))).await;
        let got: Vec<i64> = races.iter().map(|r| r.id).collect();
        assert_eq!(got, ids);
    }

    #[tokio::test]
    async fn filters_by_visibility() {
        let repo = seeded::<Races>().await;
        for visible in [true, false] {
            let filter = RaceFilter {
                visible: Some(visible),
                ..RaceFilter::default()
            };
            for race in list_races(&repo, Some(&filter), None).await {
                assert_eq!(race.visible, visible, "race {} visibility", race.id);
            }
        }
    }

    #[tokio::test]
    async fn filters_by_name_substring() {
        let repo = seeded::<Races>().await;
        let all = list_races(&repo, None, None).await;
        let Some(first) = all.first() else {
            panic!("seeded races");
        };
        let needle: String = first.name.chars().skip(1).take(4).collect();

        let filter = RaceFilter {
            name: Some(needle.clone()),
            ..RaceFilter::default()
        };
        let races = list_races(&repo, Some(&filter), None).await;
        assert!(!races.is_empty());
        // LIKE is ASCII case-insensitive in SQLite.
        for race in races {
            assert!(
                race.name.to_lowercase().contains(&needle.to_lowercase()),
                "{} lacks {needle}",
                race.name
            );
        }
    }

    #[tokio::test]
    async fn sorts_races_by_every_whitelisted_column() {
        let repo = seeded::<Races>().await;
        for direction in ["ASC", "DESC"] {
            for field in <Races as EntityKind>::ORDER_COLUMNS {
                let order = OrderParam::by(*field).direction(direction);
                let races = list_races(&repo, None, Some(&order)).await;
                assert_eq!(races.len(), 100);
                match *field {
                    "id" => assert_monotonic(
                        &races.iter().map(|r| r.id).collect::<Vec<_>>(),
                        direction,
                    ),
                    "meeting_id" => assert_monotonic(
                        &races.iter().map(|r| r.meeting_id).collect::<Vec<_>>(),
                        direction,
                    ),
                    "name" => assert_monotonic(
                        &races.iter().map(|r| r.name.clone()).collect::<Vec<_>>(),
                        direction,
                    ),
                    _ => assert_monotonic(
                        &races
                            .iter()
                            .map(|r| r.advertised_start_time)
                            .collect::<Vec<_>>(),
                        direction,
                    ),
                }
            }
        }
    }

    #[tokio::test]
    async fn lowercase_direction_is_honoured() {
        let repo = seeded::<Races>().await;
        let order = OrderParam::by("ID").direction("desc");
        let races = list_races(&repo, None, Some(&order)).await;
        assert_eq!(races.first().map(|r| r.id), Some(100));
        assert_eq!(races.last().map(|r| r.id), Some(1));
    }

    #[tokio::test]
    async fn unknown_order_column_still_returns_everything() {
        let repo = seeded::<Races>().await;
        let order = OrderParam::by("visible; DROP TABLE races").direction("DESC");
        let races = list_races(&repo, None, Some(&order)).await;
        assert_eq!(races.len(), 100);
        assert_eq!(list_races(&repo, None, None).await.len(), 100);
    }

    #[tokio::test]
    async fn status_follows_start_time() {
        let repo = seeded::<Races>().await;
        let races = list_races(&repo, None, None).await;
        let now = Utc::now().timestamp();
        for race in races {
            match race.status {
                Status::Closed => assert!(now > race.advertised_start_time.seconds),
                Status::Open => assert!(now <= race.advertised_start_time.seconds + 1),
            }
        }
    }

    #[tokio::test]
    async fn get_by_id_finds_the_race() {
        let repo = seeded::<Races>().await;
        let race = tokio_test::assert_ok!(repo.get_by_id(35).await);
        assert_eq!(race.id, 35);
    }

    #[tokio::test]
    async fn get_by_id_rejects_non_positive_and_missing_ids() {
        let repo = seeded::<Races>().await;
        for id in [-1, 0, 101] {
            let result = repo.get_by_id(id).await;
            let Err(GatewayError::NotFound { kind, id: missing }) = result else {
                panic!("expected not found for {id}, got {result:?}");
            };
            assert_eq!(kind, "race");
            assert_eq!(missing, id);
        }
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let repo = seeded::<Races>().await;
        tokio_test::assert_ok!(repo.init().await);
        tokio_test::assert_ok!(repo.init().await);
        assert_eq!(list_races(&repo, None, None).await.len(), 100);
    }

    #[tokio::test]
    async fn concurrent_init_seeds_once() {
        let Ok(pool) = open_in_memory().await else {
            panic!("in-memory sqlite");
        };
        let repo = Repository::<Races>::new(pool.clone());
        let outcomes = join_all((0..8).map(|_| repo.init())).await;
        for outcome in outcomes {
            tokio_test::assert_ok!(outcome);
        }

        // A second repository over the same store re-runs the seed; the
        // existing ids make it a no-op.
        let again = Repository::<Races>::new(pool);
        tokio_test::assert_ok!(again.init().await);
        assert_eq!(list_races(&again, None, None).await.len(), 100);
    }

    #[tokio::test]
    async fn failed_init_is_shared_and_not_retried() {
        let Ok(pool) = open_in_memory().await else {
            panic!("in-memory sqlite");
        };
        pool.close().await;
        let repo = Repository::<Races>::new(pool);

        let first = repo.init().await;
        let second = repo.init().await;
        let (Err(GatewayError::InitFailed(a)), Err(GatewayError::InitFailed(b))) = (first, second)
        else {
            panic!("both calls must fail");
        };
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[tokio::test]
    async fn list_without_init_reports_database_error() {
        let Ok(pool) = open_in_memory().await else {
            panic!("in-memory sqlite");
        };
        let repo = Repository::<Races>::new(pool);
        let result = repo.list(None, None).await;
        assert!(matches!(result, Err(GatewayError::Database(_))));
    }

    #[tokio::test]
    async fn malformed_start_time_is_a_decode_error() {
        let Ok(pool) = open_in_memory().await else {
            panic!("in-memory sqlite");
        };
        let repo = Repository::<Races>::new(pool.clone());
        tokio_test::assert_ok!(repo.init().await);
        tokio_test::assert_ok!(
            sqlx::query(
                "INSERT INTO races (id, meeting_id, name, visible, advertised_start_time) \
                 VALUES (101, 1, 'Broken', 1, 'soon')",
            )
            .execute(&pool)
            .await
        );

        let result = repo.list(None, None).await;
        let Err(GatewayError::Decode { column, value, .. }) = result else {
            panic!("expected decode error, got {result:?}");
        };
        assert_eq!(column, "advertised_start_time");
        assert_eq!(value, "soon");
    }

    #[tokio::test]
    async fn events_list_all() {
        let repo = seeded::<SportEvents>().await;
        let events = list_events(&repo, Some(&EventFilter::default()), None).await;
        assert_eq!(events.len(), 100);
        let starts: Vec<Timestamp> = events.iter().map(|e| e.advertised_start_time).collect();
        assert_monotonic(&starts, "ASC");
    }

    #[tokio::test]
    async fn events_filter_by_type_and_location() {
        let repo = seeded::<SportEvents>().await;
        let all = list_events(&repo, None, None).await;
        let Some(sample) = all.first() else {
            panic!("seeded events");
        };

        let by_type = EventFilter {
            event_type: Some(sample.event_type.clone()),
            ..EventFilter::default()
        };
        let events = list_events(&repo, Some(&by_type), None).await;
        assert!(!events.is_empty());
        for event in events {
            assert_eq!(event.event_type, sample.event_type);
        }

        let by_location = EventFilter {
            location: Some(sample.location.clone()),
            visible: Some(sample.visible),
            ..EventFilter::default()
        };
        let events = list_events(&repo, Some(&by_location), None).await;
        assert!(events.iter().any(|e| e.id == sample.id));
        for event in events {
            assert_eq!(event.location, sample.location);
            assert_eq!(event.visible, sample.visible);
        }
    }

    #[tokio::test]
    async fn events_filter_by_name_and_visibility() {
        let repo = seeded::<SportEvents>().await;
        let filter = EventFilter {
            visible: Some(true),
            ..EventFilter::default()
        };
        for event in list_events(&repo, Some(&filter), None).await {
            assert!(event.visible, "event {} should be visible", event.id);
        }

        let filter = EventFilter {
            name: Some("a".to_string()),
            ..EventFilter::default()
        };
        for event in list_events(&repo, Some(&filter), None).await {
            assert!(event.name.to_lowercase().contains('a'));
        }
    }

    #[tokio::test]
    async fn sorts_events_by_every_whitelisted_column() {
        let repo = seeded::<SportEvents>().await;
        for direction in ["ASC", "DESC"] {
            for field in <SportEvents as EntityKind>::ORDER_COLUMNS {
                let order = OrderParam::by(*field).direction(direction);
                let events = list_events(&repo, None, Some(&order)).await;
                assert_eq!(events.len(), 100);
                match *field {
                    "id" => assert_monotonic(
                        &events.iter().map(|e| e.id).collect::<Vec<_>>(),
                        direction,
                    ),
                    "name" => assert_monotonic(
                        &events.iter().map(|e| e.name.clone()).collect::<Vec<_>>(),
                        direction,
                    ),
                    "type" => assert_monotonic(
                        &events
                            .iter()
                            .map(|e| e.event_type.clone())
                            .collect::<Vec<_>>(),
                        direction,
                    ),
                    _ => assert_monotonic(
                        &events
                            .iter()
                            .map(|e| e.advertised_start_time)
                            .collect::<Vec<_>>(),
                        direction,
                    ),
                }
            }
        }
    }

    #[tokio::test]
    async fn seeded_events_are_both_open_and_closed() {
        let repo = seeded::<SportEvents>().await;
        let events = list_events(&repo, None, None).await;
        assert!(events.iter().any(|e| e.status == Status::Closed));
        assert!(events.iter().any(|e| e.status == Status::Open));
    }
}
