//! SQLite connection pool setup.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::GatewayConfig;
use crate::error::GatewayError;

/// Opens the pool described by `config`.
///
/// In-memory URLs are routed to [`open_in_memory`], since every extra
/// connection would see its own empty database.
///
/// # Errors
///
/// Returns [`GatewayError::Database`] if the URL is invalid or the first
/// connection cannot be established.
pub async fn connect(config: &GatewayConfig) -> Result<SqlitePool, GatewayError> {
    if config.is_in_memory() {
        return open_in_memory().await;
    }

    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect_with(options)
        .await?;

    tracing::info!(url = %config.database_url, "connected to sqlite");
    Ok(pool)
}

/// Opens a private in-memory database on a single long-lived connection.
///
/// # Errors
///
/// Returns [`GatewayError::Database`] if SQLite cannot be opened.
pub async fn open_in_memory() -> Result<SqlitePool, GatewayError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await?;
    Ok(pool)
}
