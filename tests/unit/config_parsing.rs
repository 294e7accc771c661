//! Unit tests for TOML configuration parsing.

use capper_motion::config::{load_config, parse_config, SequenceConfig, DEFAULT_TICK_NS};
use capper_motion::diagnostics::Verbosity;
use capper_motion::error::{ConfigError, Error};

const STATION: &str = r#"
[carriage]
name = "carriage"
step_angle_deg = 1.8
distance_per_rev_mm = 0.8
rated_rpm = 400.0
travel_mm = 750.0

[head]
name = "head"
step_angle_deg = 1.8
distance_per_rev_mm = 0.8
rated_rpm = 400.0
travel_mm = 250.0
invert_direction = true

[solenoid]
actuation_ms = 1000

[logging]
verbosity = "debug"
"#;

/// Test parsing the station configuration with optional fields left out.
#[test]
fn test_parse_station_config() {
    let config: SequenceConfig = toml::from_str(STATION).expect("Failed to parse TOML");

    assert_eq!(config.carriage.name.as_str(), "carriage");
    assert_eq!(config.carriage.step_angle.0, 1.8);
    assert_eq!(config.carriage.distance_per_revolution.0, 0.8);
    assert_eq!(config.carriage.rated_rpm.0, 400.0);
    assert_eq!(config.carriage.travel_distance.0, 750.0);
    assert!(!config.carriage.invert_direction);
    assert!(config.carriage.enable_active_low);

    assert_eq!(config.head.travel_distance.0, 250.0);
    assert!(config.head.invert_direction);
}

/// Test that solenoid and timing defaults fill in missing keys.
#[test]
fn test_defaults_applied() {
    let config = parse_config(STATION).expect("Station config should be valid");

    assert_eq!(config.solenoid.actuation_ms, 1000);
    assert_eq!(config.solenoid.margin_ms, 40);
    assert_eq!(config.solenoid.settle_ms, 500);
    assert_eq!(config.solenoid.dwell_ms(), Some(1040));
    assert_eq!(config.timing.tick_ns, DEFAULT_TICK_NS);
    assert_eq!(config.logging.verbosity, Verbosity::Debug);
}

/// Test that the compiled-in defaults match the station file.
#[test]
fn test_default_matches_station() {
    let parsed = parse_config(STATION).unwrap();
    let builtin = SequenceConfig::default();

    assert_eq!(parsed.carriage.travel_distance, builtin.carriage.travel_distance);
    assert_eq!(parsed.head.travel_distance, builtin.head.travel_distance);
    assert_eq!(parsed.solenoid, builtin.solenoid);
    assert_eq!(parsed.timing, builtin.timing);
}

/// Test that a missing axis table is a parse error.
#[test]
fn test_missing_head_rejected() {
    let toml_str = r#"
[carriage]
name = "carriage"
step_angle_deg = 1.8
distance_per_rev_mm = 0.8
rated_rpm = 400.0
travel_mm = 750.0
"#;

    let result = parse_config(toml_str);
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test that an unknown verbosity is a parse error.
#[test]
fn test_unknown_verbosity_rejected() {
    let toml_str = STATION.replace("\"debug\"", "\"chatty\"");
    let result = parse_config(&toml_str);
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test loading configuration from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("capper-motion-{}.toml", std::process::id()));
    std::fs::write(&path, STATION).expect("Failed to write temp config");

    let result = load_config(&path);
    let _ = std::fs::remove_file(&path);

    let config = result.expect("Config should load");
    assert_eq!(config.head.name.as_str(), "head");
}

/// Test that a missing file is reported as an I/O error.
#[test]
fn test_load_config_missing_file() {
    let result = load_config("/nonexistent/capper.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}
