//! # capper-motion
//!
//! Coordinated two-axis stepper sequencing for a solenoid capping station,
//! with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Configuration-driven**: Define axes, solenoid timing and scheduling in TOML
//! - **embedded-hal 1.0**: Uses `OutputPin` for STEP/DIR/ENABLE and the solenoid, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//! - **Coordinated moves**: Every axis of a move arrives on the same tick
//! - **Rate ceilings**: No axis ever steps faster than its rated speed allows
//! - **Injected time**: Clocks, delays and loggers are values, so cycles run on a host
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use capper_motion::{FmtLogger, Sequencer, SequenceConfig, Solenoid, StepDirOutput, Verbosity};
//!
//! // Load configuration from TOML, or use the compiled-in station constants
//! let config: SequenceConfig = capper_motion::load_config("capper.toml")?;
//! let logger = FmtLogger::new(uart, config.logging.verbosity);
//!
//! let carriage = StepDirOutput::new(c_step, c_dir, c_enable, delay_c).configured(&config.carriage);
//! let head = StepDirOutput::new(h_step, h_dir, h_enable, delay_h).configured(&config.head);
//!
//! let mut sequencer = Sequencer::new(&config, logger)?;
//! let report = sequencer.execute(
//!     [carriage, head],
//!     &mut Solenoid::new(solenoid_pin),
//!     &mut delay,
//!     &mut DelayClock::new(timer_delay, config.timing.tick_ns as u32),
//! )?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables `DefmtLogger` and `defmt::Format` on public enums

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod clock;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod kinematics;
pub mod motion;
pub mod motor;
pub mod sequencer;

// Re-exports for ergonomic API
pub use clock::{Clock, DelayClock, TickClock};
pub use config::{validate_config, AxisConfig, MotorSpec, SequenceConfig};
pub use diagnostics::{FmtLogger, Logger, NullLogger, Verbosity};
pub use error::{Error, Result};
pub use kinematics::AxisKinematics;
pub use motion::{CoordinatedProfile, Direction};
pub use motor::{Axis, MoveCommand, MoveStats, MultiAxisController, StepDirOutput, StepOutput};
pub use sequencer::{SequencePhase, SequenceReport, Sequencer, Solenoid};

#[cfg(feature = "defmt")]
pub use diagnostics::DefmtLogger;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, Millimeters, Rpm, Steps, StepsPerSec};
