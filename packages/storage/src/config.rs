// ABOUTME: Storage configuration for the SQLite backend
// ABOUTME: Defaults plus overrides read from QUOTES_* environment variables

use std::path::PathBuf;

use quotes_config::constants::{
    DEFAULT_BUSY_TIMEOUT_SECS, DEFAULT_ENABLE_WAL, DEFAULT_MAX_CONNECTIONS, QUOTES_DATABASE_PATH,
    QUOTES_DB_BUSY_TIMEOUT_SECS, QUOTES_DB_ENABLE_WAL, QUOTES_DB_MAX_CONNECTIONS,
};
use quotes_config::{default_database_path, env_var, parse_env};
use serde::{Deserialize, Serialize};

use crate::{StorageError, StorageResult};

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: PathBuf,
    pub enable_wal: bool,
    pub max_connections: u32,
    pub busy_timeout_seconds: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            enable_wal: DEFAULT_ENABLE_WAL,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout_seconds: DEFAULT_BUSY_TIMEOUT_SECS,
        }
    }
}

impl StorageConfig {
    /// Build a configuration for a database file, keeping the other defaults.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Load configuration from the environment, falling back to defaults for
    /// anything unset. Set-but-malformed values are an error.
    pub fn from_env() -> StorageResult<Self> {
        let defaults = Self::default();

        let path = env_var(QUOTES_DATABASE_PATH)
            .map(PathBuf::from)
            .unwrap_or(defaults.path);

        let max_connections = parse_env::<u32>(QUOTES_DB_MAX_CONNECTIONS)
            .map_err(|raw| invalid(QUOTES_DB_MAX_CONNECTIONS, &raw))?
            .unwrap_or(defaults.max_connections);
        if max_connections == 0 {
            return Err(invalid(QUOTES_DB_MAX_CONNECTIONS, "0"));
        }

        let busy_timeout_seconds = parse_env::<u64>(QUOTES_DB_BUSY_TIMEOUT_SECS)
            .map_err(|raw| invalid(QUOTES_DB_BUSY_TIMEOUT_SECS, &raw))?
            .unwrap_or(defaults.busy_timeout_seconds);

        let enable_wal = parse_env::<bool>(QUOTES_DB_ENABLE_WAL)
            .map_err(|raw| invalid(QUOTES_DB_ENABLE_WAL, &raw))?
            .unwrap_or(defaults.enable_wal);

        Ok(Self {
            path,
            enable_wal,
            max_connections,
            busy_timeout_seconds,
        })
    }
}

fn invalid(name: &str, raw: &str) -> StorageError {
    StorageError::InvalidConfig(format!("{} has invalid value {:?}", name, raw))
}
