use crate::error::{Result, VenueError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;

/// Default proximity search radius (20 km)
pub const DEFAULT_RADIUS_M: f64 = 20_000.0;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// How the search orchestrator gathers candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SearchStrategy {
    /// Use the spatial index when the store has one, otherwise scan
    #[default]
    Auto,
    /// Always ask the store for a radius query
    Indexed,
    /// Fetch by category and filter by distance in process
    Scan,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchStrategy::Auto => "auto",
            SearchStrategy::Indexed => "indexed",
            SearchStrategy::Scan => "scan",
        };
        f.write_str(name)
    }
}

/// Layered configuration for venue search
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub default_radius_m: ConfigValue<f64>,
    pub strategy: ConfigValue<SearchStrategy>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            default_radius_m: ConfigValue::new(DEFAULT_RADIUS_M, ConfigSource::Default),
            strategy: ConfigValue::new(SearchStrategy::Auto, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| VenueError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| VenueError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(radius) = file_config.default_radius_m {
            validate_radius(radius)?;
            self.default_radius_m.update(radius, ConfigSource::File);
        }

        if let Some(strategy) = file_config.strategy {
            self.strategy.update(parse_search_strategy(&strategy)?, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // VENUESCOPE_DEFAULT_RADIUS_M
        if let Ok(radius_str) = env::var("VENUESCOPE_DEFAULT_RADIUS_M") {
            match radius_str.trim().parse::<f64>() {
                Ok(radius) if validate_radius(radius).is_ok() => {
                    self.default_radius_m.update(radius, ConfigSource::Environment)
                }
                _ => tracing::warn!(
                    "Invalid VENUESCOPE_DEFAULT_RADIUS_M value '{}': expected positive meters",
                    radius_str
                ),
            }
        }

        // VENUESCOPE_SEARCH_STRATEGY
        if let Ok(strategy_str) = env::var("VENUESCOPE_SEARCH_STRATEGY") {
            match parse_search_strategy(&strategy_str) {
                Ok(strategy) => self.strategy.update(strategy, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid VENUESCOPE_SEARCH_STRATEGY value '{}': expected auto, indexed, or scan",
                    strategy_str
                ),
            }
        }

        self
    }

    /// Freeze the layered values into immutable search settings
    pub fn settings(&self) -> Result<SearchSettings> {
        validate_radius(self.default_radius_m.value)?;
        Ok(SearchSettings {
            default_radius_m: self.default_radius_m.value,
            strategy: self.strategy.value,
        })
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "default_radius_m".to_string(),
            (format!("{}", self.default_radius_m.value), self.default_radius_m.source),
        );

        map.insert(
            "strategy".to_string(),
            (self.strategy.value.to_string(), self.strategy.source),
        );

        map
    }
}

/// Search settings, fixed at construction time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSettings {
    pub default_radius_m: f64,
    pub strategy: SearchStrategy,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { default_radius_m: DEFAULT_RADIUS_M, strategy: SearchStrategy::Auto }
    }
}

impl SearchSettings {
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    default_radius_m: Option<f64>,
    strategy: Option<String>,
}

/// Parse search strategy from string
pub fn parse_search_strategy(s: &str) -> Result<SearchStrategy> {
    match s.trim().to_lowercase().as_str() {
        "auto" => Ok(SearchStrategy::Auto),
        "indexed" | "index" => Ok(SearchStrategy::Indexed),
        "scan" => Ok(SearchStrategy::Scan),
        _ => Err(VenueError::ConfigInvalid {
            key: "strategy".to_string(),
            reason: format!("Invalid search strategy: {}. Use auto, indexed, or scan", s),
        }),
    }
}

fn validate_radius(radius: f64) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(VenueError::ConfigInvalid {
            key: "default_radius_m".to_string(),
            reason: format!("must be a positive number of meters, got {}", radius),
        })
    }
}
