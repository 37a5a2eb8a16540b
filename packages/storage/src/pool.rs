// ABOUTME: SQLite pool construction and migrations
// ABOUTME: Opens file-backed or in-memory pools and applies the embedded schema

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::{StorageConfig, StorageResult};

/// Open a pool for the configured database file, creating the file and its
/// parent directory when missing, then apply migrations.
pub async fn open_pool(config: &StorageConfig) -> StorageResult<SqlitePool> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let journal_mode = if config.enable_wal {
        SqliteJournalMode::Wal
    } else {
        SqliteJournalMode::Delete
    };

    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(journal_mode)
        .busy_timeout(Duration::from_secs(config.busy_timeout_seconds));

    debug!("Opening database at: {}", config.path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.busy_timeout_seconds))
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    info!("Database ready at {}", config.path.display());
    Ok(pool)
}

/// Open a single-connection in-memory pool with the schema applied.
///
/// Every SQLite connection to `:memory:` is its own database, so the pool is
/// pinned to one connection that never expires.
pub async fn open_memory_pool() -> StorageResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply the embedded migrations.
pub async fn run_migrations(pool: &SqlitePool) -> StorageResult<()> {
    info!("Running database migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
