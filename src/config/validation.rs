//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::kinematics::AxisKinematics;

use super::{AxisConfig, SequenceConfig};

/// Validate a sequence configuration.
///
/// Checks:
/// - Every axis has strictly positive, finite physical parameters
/// - The scheduling tick is non-zero
/// - The scheduling tick is no longer than any axis' shortest step interval
/// - Actuation time plus margin fits in a millisecond counter
pub fn validate_config(config: &SequenceConfig) -> Result<()> {
    if config.timing.tick_ns == 0 {
        return Err(Error::Config(ConfigError::InvalidTickPeriod(0)));
    }

    for axis in config.axes() {
        validate_axis(axis, config.timing.tick_ns)?;
    }

    if config.solenoid.dwell_ms().is_none() {
        return Err(Error::Config(ConfigError::DwellOverflow));
    }

    Ok(())
}

fn validate_axis(axis: &AxisConfig, tick_ns: u64) -> Result<()> {
    let spec = axis.spec()?;
    let kinematics = AxisKinematics::from_spec(&spec)?;

    // Two pulses of one axis must never fall due within the same tick.
    if tick_ns > kinematics.min_step_interval_ns {
        return Err(Error::Config(ConfigError::TickTooCoarse {
            axis: axis.name.clone(),
            tick_ns,
            min_interval_ns: kinematics.min_step_interval_ns,
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Degrees, Millimeters, Rpm};
    use crate::error::Parameter;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SequenceConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_step_angle() {
        let mut config = SequenceConfig::default();
        config.head.step_angle = Degrees(-1.8);

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidConfiguration {
                parameter: Parameter::StepAngle,
                ..
            }))
        ));
    }

    #[test]
    fn test_zero_tick_rejected() {
        let mut config = SequenceConfig::default();
        config.timing.tick_ns = 0;
        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidTickPeriod(0)))
        );
    }

    #[test]
    fn test_tick_too_coarse() {
        let mut config = SequenceConfig::default();
        // 750 us step interval at 400 rpm; a 1 ms tick would drop pulses
        config.timing.tick_ns = 1_000_000;
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::TickTooCoarse { min_interval_ns: 750_000, .. }))
        ));
    }

    #[test]
    fn test_faster_motor_tightens_tick_bound() {
        let mut config = SequenceConfig::default();
        config.carriage = AxisConfig::new(
            "fast",
            Degrees(1.8),
            Millimeters(0.8),
            Rpm(3000.0),
            Millimeters(10.0),
        );
        // 3000 rpm * 200 / 60 = 10000 steps/s = 100 us interval
        config.timing.tick_ns = 100_000;
        assert!(validate_config(&config).is_ok());
        config.timing.tick_ns = 100_001;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_dwell_overflow_rejected() {
        let mut config = SequenceConfig::default();
        config.solenoid.actuation_ms = u32::MAX;
        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::DwellOverflow))
        );
    }
}
