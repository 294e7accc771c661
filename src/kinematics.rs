//! Motor kinematics: step counts and step-rate ceilings from physical parameters.
//!
//! Pure functions; inputs are validated [`MotorSpec`] values.

use crate::config::units::{Degrees, Steps, StepsPerSec};
use crate::config::{step_interval, MotorSpec};
use crate::error::Result;

/// Slack absorbed before truncating a step count.
///
/// Decimal inputs like 0.8 mm are not exact in binary, so 750 / 0.8 × 200 may
/// come out a hair below 187500.
const STEP_TOLERANCE: f64 = 1e-6;

/// Full steps per motor revolution (360 / step angle).
#[inline]
pub fn steps_per_revolution(step_angle: Degrees) -> f64 {
    360.0 / step_angle.0
}

/// Steps needed to cover the spec's travel distance.
///
/// Fractional steps are truncated, never rounded up.
pub fn total_steps(spec: &MotorSpec) -> Steps {
    let revolutions = spec.travel_distance().0 / spec.distance_per_revolution().0;
    let raw = revolutions * steps_per_revolution(spec.step_angle());
    Steps(libm::floor(raw + STEP_TOLERANCE) as i64)
}

/// Step rate at the motor's rated speed.
///
/// This is the rated ceiling, trusted as given; step loss is not probed.
pub fn max_step_rate(spec: &MotorSpec) -> StepsPerSec {
    StepsPerSec(spec.rated_rpm().0 * steps_per_revolution(spec.step_angle()) / 60.0)
}

/// Derived axis parameters, computed once at start-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisKinematics {
    /// Full steps per revolution.
    pub steps_per_revolution: f64,

    /// Steps from origin to the work position.
    pub total_steps: Steps,

    /// Step rate ceiling.
    pub max_step_rate: StepsPerSec,

    /// Shortest step interval in nanoseconds (at the ceiling, rounded up).
    pub min_step_interval_ns: u64,
}

impl AxisKinematics {
    /// Compute kinematics from a motor specification.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for [`Parameter::MaxStepRate`] if the
    /// ceiling is so slow its step interval does not fit in a `u64`.
    ///
    /// [`Parameter::MaxStepRate`]: crate::error::Parameter::MaxStepRate
    pub fn from_spec(spec: &MotorSpec) -> Result<Self> {
        let max_step_rate = max_step_rate(spec);
        Ok(Self {
            steps_per_revolution: steps_per_revolution(spec.step_angle()),
            total_steps: total_steps(spec),
            max_step_rate,
            min_step_interval_ns: step_interval(max_step_rate)?,
        })
    }

    /// Duration of a move at the ceiling, in seconds.
    pub fn travel_time_secs(&self) -> f64 {
        self.total_steps.abs() as f64 / self.max_step_rate.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Millimeters, Rpm};
    use proptest::prelude::*;

    fn spec(travel: f64) -> MotorSpec {
        MotorSpec::new(Degrees(1.8), Millimeters(0.8), Rpm(400.0), Millimeters(travel)).unwrap()
    }

    #[test]
    fn test_steps_per_revolution() {
        assert_eq!(steps_per_revolution(Degrees(1.8)), 200.0);
        assert_eq!(steps_per_revolution(Degrees(0.9)), 400.0);
    }

    #[test]
    fn test_carriage_scenario() {
        let carriage = spec(750.0);
        assert_eq!(total_steps(&carriage), Steps(187_500));
        assert!((max_step_rate(&carriage).0 - 1333.333).abs() < 0.01);
    }

    #[test]
    fn test_head_scenario() {
        let head = spec(250.0);
        assert_eq!(total_steps(&head), Steps(62_500));
        assert!((max_step_rate(&head).0 - 1333.333).abs() < 0.01);
    }

    #[test]
    fn test_truncates_fractional_steps() {
        // 0.01 mm at 250 steps/mm = 2.5 steps
        let short = spec(0.01);
        assert_eq!(total_steps(&short), Steps(2));
    }

    #[test]
    fn test_uneven_step_angle() {
        // 360 / 7 = 51.43 steps/rev, one revolution of travel
        let odd = MotorSpec::new(Degrees(7.0), Millimeters(1.0), Rpm(60.0), Millimeters(1.0)).unwrap();
        assert_eq!(total_steps(&odd), Steps(51));
    }

    #[test]
    fn test_axis_kinematics() {
        let k = AxisKinematics::from_spec(&spec(750.0)).unwrap();
        assert_eq!(k.steps_per_revolution, 200.0);
        assert_eq!(k.total_steps, Steps(187_500));
        assert_eq!(k.min_step_interval_ns, 750_000);
        assert!((k.travel_time_secs() - 140.625).abs() < 1e-6);
    }

    #[test]
    fn test_slow_motor_interval_exceeds_u32() {
        // 0.03 rpm at 200 steps/rev = 0.1 steps/s, one step per 10 s
        let slow = MotorSpec::new(Degrees(1.8), Millimeters(0.8), Rpm(0.03), Millimeters(1.0)).unwrap();
        let k = AxisKinematics::from_spec(&slow).unwrap();
        assert!((k.max_step_rate.0 - 0.1).abs() < 1e-12);
        assert!(k.min_step_interval_ns >= 10_000_000_000);
    }

    proptest! {
        #[test]
        fn total_steps_non_negative_and_monotone(
            a in 0.001f64..5000.0,
            b in 0.001f64..5000.0,
            angle in 0.1f64..90.0,
            pitch in 0.01f64..50.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let make = |travel| {
                MotorSpec::new(Degrees(angle), Millimeters(pitch), Rpm(100.0), Millimeters(travel)).unwrap()
            };
            let lo_steps = total_steps(&make(lo));
            let hi_steps = total_steps(&make(hi));
            prop_assert!(lo_steps.value() >= 0);
            prop_assert!(lo_steps <= hi_steps);
        }

        #[test]
        fn max_step_rate_linear_in_rpm(
            rpm in 1.0f64..3000.0,
            factor in 1.0f64..10.0,
            angle in 0.1f64..90.0,
        ) {
            let make = |rpm| {
                MotorSpec::new(Degrees(angle), Millimeters(1.0), Rpm(rpm), Millimeters(10.0)).unwrap()
            };
            let base = max_step_rate(&make(rpm)).0;
            let scaled = max_step_rate(&make(rpm * factor)).0;
            prop_assert!((scaled - base * factor).abs() <= base * factor * 1e-9);
        }
    }
}
