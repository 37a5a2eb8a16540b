// ABOUTME: Configuration helpers shared by the quotes packages
// ABOUTME: Environment variable names, defaults, and typed lookups

pub mod constants;

use std::env;
use std::path::PathBuf;

use tracing::debug;

/// Read an environment variable, treating empty values as unset.
pub fn env_var(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}

/// Parse an environment variable into `T`.
///
/// Returns `Ok(None)` when the variable is unset and `Err` with the raw value
/// when it is set but does not parse.
pub fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>, String> {
    match env_var(name) {
        Some(raw) => raw.parse::<T>().map(Some).map_err(|_| {
            debug!("Rejecting {}={:?}", name, raw);
            raw
        }),
        None => Ok(None),
    }
}

/// Directory holding the quotes data files (~/.quotes)
fn data_dir() -> PathBuf {
    let home = env_var(constants::HOME)
        .or_else(|| env_var(constants::USERPROFILE))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join(constants::DEFAULT_DATA_DIR)
}

/// Default SQLite database location (~/.quotes/quotes.db)
pub fn default_database_path() -> PathBuf {
    data_dir().join(constants::DEFAULT_DATABASE_FILE)
}
