use std::env;
use std::path::PathBuf;

use venuescope_core::config::{LayeredConfig, SearchSettings};

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    pub database_url: Option<String>,
    /// Optional TOML file with search settings
    pub config_path: Option<PathBuf>,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("VENUESCOPE_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(5000);

        let cors_origin = env::var("VENUESCOPE_CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty());

        let config_path = env::var("VENUESCOPE_CONFIG").ok().map(PathBuf::from);

        Self { port, cors_origin, database_url, config_path }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Check if PostgreSQL storage is configured
    pub fn uses_postgres(&self) -> bool {
        self.database_url.is_some()
    }

    /// Layer defaults, the optional config file, and `VENUESCOPE_*`
    /// environment variables
    pub fn layered_config(&self) -> venuescope_core::Result<LayeredConfig> {
        let mut layered = LayeredConfig::with_defaults();
        if let Some(path) = &self.config_path {
            layered = layered.load_from_file(path)?;
        }
        Ok(layered.load_from_env())
    }

    /// Resolve the search settings the service is built with
    pub fn search_settings(&self) -> venuescope_core::Result<SearchSettings> {
        self.layered_config()?.settings()
    }
}
