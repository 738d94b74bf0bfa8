//! Tracker configuration from environment variables.

use std::{env, path::PathBuf};

/// Environment variable overriding the database path.
pub const DB_PATH_ENV: &str = "CARBONLOG_DB_PATH";

/// Database file used when nothing else is configured.
pub const DEFAULT_DB_PATH: &str = "carbon_emissions.db";

/// Settings for opening the emission ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Path to the SQLite database file.
    pub db_path: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

impl TrackerConfig {
    /// Loads `CARBONLOG_DB_PATH`, falling back to [`DEFAULT_DB_PATH`].
    /// An empty value counts as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = lookup(DB_PATH_ENV)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));
        Self { db_path }
    }

    /// Replaces the database path when `path` is set.
    pub fn with_db_override(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.db_path = path;
        }
        self
    }
}
