//! Sequence configuration - root configuration structure.

use serde::Deserialize;

use super::motor::AxisConfig;
use super::sequence::{LoggingConfig, SolenoidConfig, TimingConfig};
use super::units::{Degrees, Millimeters, Rpm};

/// Root configuration structure from TOML.
///
/// The carriage is axis 0 and the head (which carries the solenoid) is
/// axis 1 of every coordinated move.
#[derive(Debug, Clone, Deserialize)]
pub struct SequenceConfig {
    /// Carriage axis, left at its work position after the cycle.
    pub carriage: AxisConfig,

    /// Head axis, returned to origin after actuation.
    pub head: AxisConfig,

    /// Solenoid dwell timing.
    #[serde(default)]
    pub solenoid: SolenoidConfig,

    /// Coordinated move scheduling.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Diagnostic output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SequenceConfig {
    /// Axis configurations in controller order.
    pub fn axes(&self) -> [&AxisConfig; 2] {
        [&self.carriage, &self.head]
    }
}

impl Default for SequenceConfig {
    /// Station constants: two 1.8° motors on 0.8 mm/rev lead screws rated at
    /// 400 rpm, 750 mm carriage travel, 250 mm head travel, 1 s actuation.
    fn default() -> Self {
        Self {
            carriage: AxisConfig::new(
                "carriage",
                Degrees(1.8),
                Millimeters(0.8),
                Rpm(400.0),
                Millimeters(750.0),
            ),
            head: AxisConfig::new(
                "head",
                Degrees(1.8),
                Millimeters(0.8),
                Rpm(400.0),
                Millimeters(250.0),
            ),
            solenoid: SolenoidConfig::default(),
            timing: TimingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
