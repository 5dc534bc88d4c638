//! Runtime configuration for grocery core consumers.
//!
//! # Responsibility
//! - Provide defaults for database location, busy timeout and logging.
//! - Apply `GROCERY_*` environment overrides.
//!
//! # Invariants
//! - Unset or empty variables keep the default.
//! - Malformed numeric values are rejected, never silently ignored.

use crate::db::{SqliteFileHelper, DEFAULT_BUSY_TIMEOUT};
use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_DB_PATH: &str = "GROCERY_DB_PATH";
pub const ENV_BUSY_TIMEOUT_MS: &str = "GROCERY_BUSY_TIMEOUT_MS";
pub const ENV_LOG_LEVEL: &str = "GROCERY_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "GROCERY_LOG_DIR";

const DEFAULT_DB_FILE: &str = "grocery.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { key, value } => {
                write!(f, "{key} must be a non-negative integer, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Settings needed to open the store and start logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
    pub busy_timeout: Duration,
    pub log_level: String,
    /// Logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl StoreConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(path) = read(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path.trim());
        }
        if let Some(raw) = read(ENV_BUSY_TIMEOUT_MS) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: ENV_BUSY_TIMEOUT_MS,
                    value: raw.clone(),
                })?;
            config.busy_timeout = Duration::from_millis(millis);
        }
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = level.trim().to_string();
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(dir.trim()));
        }

        Ok(config)
    }

    /// Builds the file helper described by this config.
    pub fn connection_helper(&self) -> SqliteFileHelper {
        SqliteFileHelper::new(self.db_path.clone()).with_busy_timeout(self.busy_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, StoreConfig, ENV_BUSY_TIMEOUT_MS, ENV_DB_PATH, ENV_LOG_DIR};
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::time::Duration;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_keeps_defaults() {
        let config = StoreConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn overrides_are_applied_and_trimmed() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (ENV_DB_PATH, " /tmp/groceries.db "),
            (ENV_BUSY_TIMEOUT_MS, "250"),
            (ENV_LOG_DIR, "/tmp/grocery-logs"),
        ]))
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/tmp/groceries.db"));
        assert_eq!(config.busy_timeout, Duration::from_millis(250));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/grocery-logs")));
        assert_eq!(config.connection_helper().path(), config.db_path.as_path());
    }

    #[test]
    fn malformed_timeout_is_rejected() {
        let err = StoreConfig::from_lookup(lookup_from(&[(ENV_BUSY_TIMEOUT_MS, "soon")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                key: ENV_BUSY_TIMEOUT_MS,
                value: "soon".to_string(),
            }
        );
    }
}
