// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of the environment variables read by the quotes services

// Database Configuration
pub const QUOTES_DATABASE_PATH: &str = "QUOTES_DATABASE_PATH";
pub const QUOTES_DB_MAX_CONNECTIONS: &str = "QUOTES_DB_MAX_CONNECTIONS";
pub const QUOTES_DB_BUSY_TIMEOUT_SECS: &str = "QUOTES_DB_BUSY_TIMEOUT_SECS";
pub const QUOTES_DB_ENABLE_WAL: &str = "QUOTES_DB_ENABLE_WAL";

// System Environment Variables
pub const HOME: &str = "HOME";
pub const USERPROFILE: &str = "USERPROFILE"; // Windows

// Defaults
pub const DEFAULT_DATA_DIR: &str = ".quotes";
pub const DEFAULT_DATABASE_FILE: &str = "quotes.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ENABLE_WAL: bool = true;
