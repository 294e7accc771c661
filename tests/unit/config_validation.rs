//! Unit tests for configuration validation.

use capper_motion::config::units::{Degrees, Millimeters, Rpm};
use capper_motion::config::{validate_config, AxisConfig, SequenceConfig};
use capper_motion::error::{ConfigError, Error, Parameter};

fn invalid_parameter(config: &SequenceConfig) -> Option<Parameter> {
    match validate_config(config) {
        Err(Error::Config(ConfigError::InvalidConfiguration { parameter, .. })) => Some(parameter),
        _ => None,
    }
}

/// Test that the station constants validate.
#[test]
fn test_station_defaults_valid() {
    assert!(validate_config(&SequenceConfig::default()).is_ok());
}

/// Test that zero and negative physical parameters are rejected.
#[test]
fn test_non_positive_parameters_rejected() {
    let mut config = SequenceConfig::default();
    config.carriage.step_angle = Degrees(0.0);
    assert_eq!(invalid_parameter(&config), Some(Parameter::StepAngle));

    let mut config = SequenceConfig::default();
    config.head.distance_per_revolution = Millimeters(-0.8);
    assert_eq!(invalid_parameter(&config), Some(Parameter::DistancePerRevolution));

    let mut config = SequenceConfig::default();
    config.head.rated_rpm = Rpm(0.0);
    assert_eq!(invalid_parameter(&config), Some(Parameter::RatedRpm));

    let mut config = SequenceConfig::default();
    config.carriage.travel_distance = Millimeters(0.0);
    assert_eq!(invalid_parameter(&config), Some(Parameter::TravelDistance));
}

/// Test that a very slow motor validates while an unschedulable one is rejected.
#[test]
fn test_slow_rate_ceilings() {
    let mut config = SequenceConfig::default();
    config.head.rated_rpm = Rpm(0.03);
    assert!(validate_config(&config).is_ok());

    config.head.rated_rpm = Rpm(1e-20);
    assert_eq!(invalid_parameter(&config), Some(Parameter::MaxStepRate));
}

/// Test that a zero scheduling tick is rejected.
#[test]
fn test_zero_tick_rejected() {
    let mut config = SequenceConfig::default();
    config.timing.tick_ns = 0;
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidTickPeriod(0)))
    );
}

/// Test that a tick longer than a step interval is rejected.
#[test]
fn test_tick_too_coarse_for_fast_axis() {
    let mut config = SequenceConfig::default();
    // 0.9° at 1200 rpm = 8000 steps/s = 125 µs per step
    config.head = AxisConfig::new("head", Degrees(0.9), Millimeters(0.8), Rpm(1200.0), Millimeters(250.0));
    config.timing.tick_ns = 200_000;

    match validate_config(&config) {
        Err(Error::Config(ConfigError::TickTooCoarse { axis, tick_ns, min_interval_ns })) => {
            assert_eq!(axis.as_str(), "head");
            assert_eq!(tick_ns, 200_000);
            assert_eq!(min_interval_ns, 125_000);
        }
        other => panic!("expected TickTooCoarse, got {:?}", other),
    }

    config.timing.tick_ns = 125_000;
    assert!(validate_config(&config).is_ok());
}

/// Test that actuation time plus margin must not overflow.
#[test]
fn test_dwell_overflow_rejected() {
    let mut config = SequenceConfig::default();
    config.solenoid.actuation_ms = u32::MAX;
    assert_eq!(validate_config(&config), Err(Error::Config(ConfigError::DwellOverflow)));
}
