//! Configuration module for capper-motion.
//!
//! Provides types for loading and validating axis, solenoid and scheduling
//! configuration from TOML files (with `std` feature) or compiled-in defaults.

mod motor;
mod sequence;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use motor::{AxisConfig, MotorSpec};
pub use sequence::{
    LoggingConfig, SolenoidConfig, TimingConfig, DEFAULT_MARGIN_MS, DEFAULT_SETTLE_MS,
    DEFAULT_TICK_NS,
};
pub use system::SequenceConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

pub(crate) use motor::step_interval;

// Re-export unit types at config level
pub use units::{Degrees, Millimeters, Rpm, Steps, StepsPerSec};
