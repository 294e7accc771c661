//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SequenceConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use capper_motion::load_config;
///
/// let config = load_config("station.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SequenceConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(truncate(&e.to_string())).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SequenceConfig> {
    let config: SequenceConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(truncate(e.message())).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

// heapless::String<128> rejects longer input outright; keep the head of the message.
fn truncate(msg: &str) -> &str {
    if msg.len() <= 128 {
        return msg;
    }
    let mut end = 128;
    while !msg.is_char_boundary(end) {
        end -= 1;
    }
    &msg[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Verbosity;

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

[solenoid]
actuation_ms = 1000
"#;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config(STATION).unwrap();
        assert_eq!(config.carriage.name.as_str(), "carriage");
        assert_eq!(config.head.travel_distance.0, 250.0);
        assert_eq!(config.solenoid.margin_ms, 40);
        assert_eq!(config.solenoid.settle_ms, 500);
        assert_eq!(config.timing.tick_ns, 50_000);
        assert_eq!(config.logging.verbosity, Verbosity::Info);
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        let bad = STATION.replace("rated_rpm = 400.0\ntravel_mm = 250.0", "rated_rpm = 0.0\ntravel_mm = 250.0");
        let result = parse_config(&bad);
        assert!(matches!(result, Err(Error::Config(ConfigError::InvalidConfiguration { .. }))));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result = parse_config("[carriage]\nname = 3");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/station.toml");
        assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
    }

    #[test]
    fn test_truncate_long_message() {
        let long = "x".repeat(300);
        assert_eq!(truncate(&long).len(), 128);
        assert_eq!(truncate("short"), "short");
    }
}
