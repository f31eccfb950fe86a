//! Dynamic list-query construction.
//!
//! A list query is the kind's base `SELECT`, an optional `WHERE` clause
//! built from filter predicates, and an optional `ORDER BY` clause. Caller
//! values only ever travel as bound `?` arguments. The only caller-derived
//! text that reaches the SQL string is an ORDER BY column, and only after
//! it has been matched against the kind's closed whitelist, in which case
//! the whitelisted spelling is used.

use sqlx::Sqlite;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;

use super::kind::EntityKind;
use crate::domain::OrderParam;

/// A positional query argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlArg {
    /// Integer value.
    Int(i64),
    /// Text value.
    Text(String),
    /// Boolean, stored by SQLite as `0`/`1`.
    Bool(bool),
}

impl SqlArg {
    /// Binds this argument as the next positional parameter of `query`.
    #[must_use]
    pub fn bind_to<'q>(
        self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        match self {
            Self::Int(v) => query.bind(v),
            Self::Text(v) => query.bind(v),
            Self::Bool(v) => query.bind(v),
        }
    }
}

/// One filter condition against a fixed column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `column IN (?, ...)`. Skipped when `values` is empty.
    In {
        /// Column name.
        column: &'static str,
        /// Accepted values.
        values: Vec<i64>,
    },
    /// `column LIKE ? ESCAPE '\'` bound to `%needle%`, with LIKE
    /// wildcards in `needle` escaped so they match literally.
    Contains {
        /// Column name.
        column: &'static str,
        /// Substring to look for.
        needle: String,
    },
    /// `column = ?`.
    Equals {
        /// Column name.
        column: &'static str,
        /// Required value.
        value: SqlArg,
    },
}

/// A fully built statement and its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// SQL text with `?` placeholders.
    pub sql: String,
    /// Arguments in placeholder order.
    pub args: Vec<SqlArg>,
}

/// Returns `true` iff `candidate` case-insensitively equals a whitelisted
/// column.
#[must_use]
pub fn is_valid_column(whitelist: &[&str], candidate: &str) -> bool {
    canonical_column(whitelist, candidate).is_some()
}

fn canonical_column<'w>(whitelist: &[&'w str], candidate: &str) -> Option<&'w str> {
    whitelist
        .iter()
        .copied()
        .find(|column| column.eq_ignore_ascii_case(candidate))
}

/// Appends a `WHERE` clause for `predicates` to `query`.
///
/// Predicates are joined with `AND`. With no effective predicates the query
/// is returned untouched and the argument list is empty.
#[must_use]
pub fn apply_filter(mut query: String, predicates: Vec<Predicate>) -> (String, Vec<SqlArg>) {
    let mut clauses = Vec::with_capacity(predicates.len());
    let mut args = Vec::new();

    for predicate in predicates {
        match predicate {
            Predicate::In { column, values } => {
                if values.is_empty() {
                    continue;
                }
                let placeholders = vec!["?"; values.len()].join(", ");
                clauses.push(format!("{column} IN ({placeholders})"));
                args.extend(values.into_iter().map(SqlArg::Int));
            }
            Predicate::Contains { column, needle } => {
                clauses.push(format!("{column} LIKE ? ESCAPE '\\'"));
                args.push(SqlArg::Text(format!("%{}%", escape_like(&needle))));
            }
            Predicate::Equals { column, value } => {
                clauses.push(format!("{column} = ?"));
                args.push(value);
            }
        }
    }

    if !clauses.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&clauses.join(" AND "));
    }

    (query, args)
}

fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Appends an `ORDER BY` clause to `query`.
///
/// - no `order` at all, or no `field`: order by `default_column`
/// - `field` not in `whitelist`: no ORDER BY is added
/// - `direction` of `asc`/`desc` in any case is appended upper-cased,
///   anything else is dropped
#[must_use]
pub fn apply_order(
    mut query: String,
    order: Option<&OrderParam>,
    whitelist: &[&str],
    default_column: &str,
) -> String {
    let column = match order.and_then(|o| o.field.as_deref()) {
        None => default_column,
        Some(field) => match canonical_column(whitelist, field) {
            Some(column) => column,
            None => return query,
        },
    };

    query.push_str(" ORDER BY ");
    query.push_str(column);

    if let Some(direction) = order.and_then(|o| o.direction.as_deref()) {
        if direction.eq_ignore_ascii_case("ASC") {
            query.push_str(" ASC");
        } else if direction.eq_ignore_ascii_case("DESC") {
            query.push_str(" DESC");
        }
    }

    query
}

/// `SELECT <columns> FROM <table>` for kind `K`.
#[must_use]
pub fn base_select<K: EntityKind>() -> String {
    format!("SELECT {} FROM {}", K::COLUMNS.join(", "), K::TABLE)
}

/// Builds the complete list statement for kind `K`.
#[must_use]
pub fn build_list_query<K: EntityKind>(
    filter: Option<&K::Filter>,
    order: Option<&OrderParam>,
) -> ListQuery {
    let predicates = filter.map(K::predicates).unwrap_or_default();
    let (sql, args) = apply_filter(base_select::<K>(), predicates);
    let sql = apply_order(sql, order, K::ORDER_COLUMNS, K::DEFAULT_ORDER_COLUMN);
    ListQuery { sql, args }
}
