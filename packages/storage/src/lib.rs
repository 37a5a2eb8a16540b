// ABOUTME: Data layer and persistence for the quotes services
// ABOUTME: Storage errors, configuration, SQLite pool setup, and schema migrations

pub mod config;
pub mod pool;

use thiserror::Error;

pub use config::StorageConfig;
pub use pool::{open_memory_pool, open_pool, run_migrations};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StorageError {
    /// True when the underlying database rejected a write for violating a
    /// UNIQUE constraint.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            StorageError::Sqlx(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
