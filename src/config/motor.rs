//! Motor specification and per-axis configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::error::{ConfigError, Parameter, Result};

use super::units::{Degrees, Millimeters, Rpm, StepsPerSec};

/// Immutable physical description of one axis.
///
/// All fields are strictly positive and finite; [`MotorSpec::new`] is the only
/// way to build one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorSpec {
    step_angle: Degrees,
    distance_per_revolution: Millimeters,
    rated_rpm: Rpm,
    travel_distance: Millimeters,
}

impl MotorSpec {
    /// Create a validated motor specification.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfiguration` naming the first field that
    /// is zero, negative, NaN or infinite.
    pub fn new(
        step_angle: Degrees,
        distance_per_revolution: Millimeters,
        rated_rpm: Rpm,
        travel_distance: Millimeters,
    ) -> Result<Self> {
        check_positive(Parameter::StepAngle, step_angle.0)?;
        check_positive(Parameter::DistancePerRevolution, distance_per_revolution.0)?;
        check_positive(Parameter::RatedRpm, rated_rpm.0)?;
        check_positive(Parameter::TravelDistance, travel_distance.0)?;

        Ok(Self {
            step_angle,
            distance_per_revolution,
            rated_rpm,
            travel_distance,
        })
    }

    /// Full-step angle of the motor.
    #[inline]
    pub fn step_angle(&self) -> Degrees {
        self.step_angle
    }

    /// Linear distance covered per motor revolution.
    #[inline]
    pub fn distance_per_revolution(&self) -> Millimeters {
        self.distance_per_revolution
    }

    /// Rated speed of the motor.
    #[inline]
    pub fn rated_rpm(&self) -> Rpm {
        self.rated_rpm
    }

    /// Distance the axis travels to its work position.
    #[inline]
    pub fn travel_distance(&self) -> Millimeters {
        self.travel_distance
    }
}

pub(crate) fn check_positive(parameter: Parameter, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidConfiguration { parameter, value }.into())
    }
}

/// Shortest step interval for a rate ceiling, rejecting unusable rates.
pub(crate) fn step_interval(rate: StepsPerSec) -> Result<u64> {
    rate.min_interval_ns().ok_or_else(|| {
        ConfigError::InvalidConfiguration {
            parameter: Parameter::MaxStepRate,
            value: rate.0,
        }
        .into()
    })
}

/// One axis as written in the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Full-step angle in degrees (1.8 for 200 step/rev motors).
    #[serde(rename = "step_angle_deg")]
    pub step_angle: Degrees,

    /// Linear distance per revolution (lead screw pitch).
    #[serde(rename = "distance_per_rev_mm")]
    pub distance_per_revolution: Millimeters,

    /// Rated motor speed.
    pub rated_rpm: Rpm,

    /// Travel from origin to the work position.
    #[serde(rename = "travel_mm")]
    pub travel_distance: Millimeters,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,

    /// Driver enable input is active low (A4988/DRV8825 style).
    #[serde(default = "default_enable_active_low")]
    pub enable_active_low: bool,
}

fn default_enable_active_low() -> bool {
    true
}

impl AxisConfig {
    /// Build an axis configuration with default wiring.
    pub fn new(
        name: &str,
        step_angle: Degrees,
        distance_per_revolution: Millimeters,
        rated_rpm: Rpm,
        travel_distance: Millimeters,
    ) -> Self {
        Self {
            name: String::try_from(name).unwrap_or_default(),
            step_angle,
            distance_per_revolution,
            rated_rpm,
            travel_distance,
            invert_direction: false,
            enable_active_low: true,
        }
    }

    /// Validate the physical fields and produce a [`MotorSpec`].
    pub fn spec(&self) -> Result<MotorSpec> {
        MotorSpec::new(
            self.step_angle,
            self.distance_per_revolution,
            self.rated_rpm,
            self.travel_distance,
        )
    }
}
