//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! Environment variables > Config file > Defaults

use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;
use venuescope_core::config::{ConfigSource, LayeredConfig, SearchStrategy};

fn clear_env() {
    env::remove_var("VENUESCOPE_DEFAULT_RADIUS_M");
    env::remove_var("VENUESCOPE_SEARCH_STRATEGY");
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
default_radius_m = 15000.0
strategy = "scan"
"#
    )
    .unwrap();

    env::set_var("VENUESCOPE_DEFAULT_RADIUS_M", "25000");

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();

    assert_eq!(config.default_radius_m.value, 25_000.0);
    assert_eq!(config.default_radius_m.source, ConfigSource::Environment);
    // Strategy only came from the file
    assert_eq!(config.strategy.value, SearchStrategy::Scan);
    assert_eq!(config.strategy.source, ConfigSource::File);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_values_are_ignored() {
    clear_env();
    env::set_var("VENUESCOPE_DEFAULT_RADIUS_M", "twenty");
    env::set_var("VENUESCOPE_SEARCH_STRATEGY", "fastest");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.default_radius_m.value, 20_000.0);
    assert_eq!(config.default_radius_m.source, ConfigSource::Default);
    assert_eq!(config.strategy.value, SearchStrategy::Auto);

    clear_env();
}

#[test]
#[serial]
fn test_negative_env_radius_is_ignored() {
    clear_env();
    env::set_var("VENUESCOPE_DEFAULT_RADIUS_M", "-100");

    let config = LayeredConfig::with_defaults().load_from_env();
    assert_eq!(config.default_radius_m.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_inspection_map_reports_sources() {
    clear_env();
    env::set_var("VENUESCOPE_SEARCH_STRATEGY", "indexed");

    let map = LayeredConfig::with_defaults().load_from_env().to_inspection_map();
    assert_eq!(map["strategy"], ("indexed".to_string(), ConfigSource::Environment));
    assert_eq!(map["default_radius_m"], ("20000".to_string(), ConfigSource::Default));

    clear_env();
}

#[test]
fn test_missing_file_is_config_error() {
    let result = LayeredConfig::with_defaults().load_from_file("/nonexistent/venuescope.toml");
    assert!(result.is_err());
}
