//! PostgreSQL configuration for the venue store.
//!
//! Read once from the process environment:
//!
//! | Variable                        | Default |
//! |---------------------------------|---------|
//! | `DATABASE_URL`                  | required |
//! | `DATABASE_MAX_CONNECTIONS`      | 10      |
//! | `DATABASE_MIN_CONNECTIONS`      | 2, capped at the maximum |
//! | `DATABASE_ACQUIRE_TIMEOUT_SECS` | 30      |
//! | `VENUESCOPE_AUTO_MIGRATE`       | true    |

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use venuescope_core::error::VenueError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    Missing(String),

    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

impl ConfigError {
    fn invalid(key: &str, reason: impl Into<String>) -> Self {
        Self::Invalid { key: key.to_string(), reason: reason.into() }
    }
}

impl From<ConfigError> for VenueError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Missing(key) => VenueError::ConfigMissing { key },
            ConfigError::Invalid { key, reason } => VenueError::ConfigInvalid { key, reason },
        }
    }
}

/// Where the venue table lives and how the store talks to it.
///
/// Built once at process start and handed to `PostgresStore::new`.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
    pub pool: PoolConfig,
    pub migrations: MigrationConfig,
}

impl PostgresConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source with the same variable
    /// names as `from_env`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").ok_or_else(|| ConfigError::Missing("DATABASE_URL".to_string()))?;
        let mut config = Self::new(database_url)?;

        if let Some(max) = parse_var::<u32, _>(&lookup, "DATABASE_MAX_CONNECTIONS")? {
            config.pool.max_connections = max;
            // A small pool should not fail on the default minimum
            config.pool.min_connections = config.pool.min_connections.min(max);
        }
        if let Some(min) = parse_var::<u32, _>(&lookup, "DATABASE_MIN_CONNECTIONS")? {
            config.pool.min_connections = min;
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "DATABASE_ACQUIRE_TIMEOUT_SECS")? {
            config.pool.acquire_timeout = Duration::from_secs(secs);
        }
        if let Some(auto_run) = parse_var::<bool, _>(&lookup, "VENUESCOPE_AUTO_MIGRATE")? {
            config.migrations.auto_run = auto_run;
        }

        config.validate()?;
        Ok(config)
    }

    /// Configuration for `database_url` with default pool and migration settings
    pub fn new(database_url: String) -> Result<Self, ConfigError> {
        let config = Self {
            database_url: database_url.trim().to_string(),
            pool: PoolConfig::default(),
            migrations: MigrationConfig::default(),
        };
        config.validate_url()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_url()?;
        self.pool.validate()
    }

    fn validate_url(&self) -> Result<(), ConfigError> {
        if self.database_url.is_empty() {
            return Err(ConfigError::invalid("DATABASE_URL", "cannot be empty"));
        }
        if !["postgres://", "postgresql://"].iter().any(|s| self.database_url.starts_with(s)) {
            return Err(ConfigError::invalid(
                "DATABASE_URL",
                "must start with postgres:// or postgresql://",
            ));
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::invalid(key, format!("'{}' could not be parsed", raw))),
    }
}

/// Connection pool sizing and timeouts
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_connections: 2,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

impl PoolConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_connections == 0 {
            return Err(ConfigError::invalid("DATABASE_MAX_CONNECTIONS", "must be greater than 0"));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::invalid(
                "DATABASE_MIN_CONNECTIONS",
                format!("{} exceeds the maximum of {}", self.min_connections, self.max_connections),
            ));
        }
        if self.acquire_timeout.is_zero() {
            return Err(ConfigError::invalid("DATABASE_ACQUIRE_TIMEOUT_SECS", "must be positive"));
        }
        Ok(())
    }
}

/// Whether `PostgresStore::new` brings the venue schema up to date
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    pub auto_run: bool,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self { auto_run: true }
    }
}
