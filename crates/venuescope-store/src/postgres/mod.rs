//! PostgreSQL/PostGIS storage adapter implementation

pub mod config;
pub mod migrations;
pub mod venue;

pub use config::{ConfigError, MigrationConfig, PoolConfig, PostgresConfig};
pub use migrations::{MigrationError, MigrationManager};

use sqlx::{postgres::PgPoolOptions, PgPool};
use venuescope_core::error::{Result, VenueError};

/// PostgreSQL storage adapter
pub struct PostgresStore {
    pool: PgPool,
    config: PostgresConfig,
}

impl PostgresStore {
    /// Connect with the given configuration, running migrations when
    /// `config.migrations.auto_run` is set
    pub async fn new(config: PostgresConfig) -> Result<Self> {
        config.validate()?;

        let pool = PgPoolOptions::new()
            .min_connections(config.pool.min_connections)
            .max_connections(config.pool.max_connections)
            .acquire_timeout(config.pool.acquire_timeout)
            .idle_timeout(config.pool.idle_timeout)
            .max_lifetime(config.pool.max_lifetime)
            .connect(&config.database_url)
            .await
            .map_err(|e| {
                VenueError::store_unavailable(format!("Failed to connect to database: {}", e))
            })?;

        let store = Self { pool, config };
        store.health_check_inner().await?;

        if store.config.migrations.auto_run {
            store.run_migrations().await?;
        }

        tracing::debug!(
            max_connections = store.config.pool.max_connections,
            "PostgreSQL venue store ready"
        );

        Ok(store)
    }

    /// Run all pending migrations
    pub async fn run_migrations(&self) -> Result<()> {
        let manager = MigrationManager::new(self.pool.clone());
        manager
            .run_migrations()
            .await
            .map_err(|e| VenueError::store_unavailable(format!("Migration failed: {}", e)))
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &PostgresConfig {
        &self.config
    }

    async fn health_check_inner(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| VenueError::store_unavailable(format!("Health check failed: {}", e)))?;
        Ok(())
    }
}
