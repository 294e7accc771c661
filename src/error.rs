//! Error types for capper-motion.
//!
//! Provides unified error handling across configuration, axis I/O, coordinated
//! motion and the actuation sequence.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all capper-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Axis hardware or registration error
    Motor(MotorError),
    /// Coordinated move error
    Motion(MotionError),
    /// Actuation sequence ordering error
    Sequence(SequenceError),
}

/// Physical parameter named by an [`ConfigError::InvalidConfiguration`] error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parameter {
    /// Motor step angle in degrees
    StepAngle,
    /// Linear distance covered by one revolution
    DistancePerRevolution,
    /// Rated motor speed in revolutions per minute
    RatedRpm,
    /// Linear travel distance of the axis
    TravelDistance,
    /// Step rate ceiling of an axis
    MaxStepRate,
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A physical motor parameter is zero, negative or not finite
    InvalidConfiguration {
        /// Offending parameter
        parameter: Parameter,
        /// Value that was supplied
        value: f64,
    },
    /// Scheduling tick must be > 0
    InvalidTickPeriod(u64),
    /// Scheduling tick is longer than an axis' shortest step interval
    TickTooCoarse {
        /// Axis name
        axis: heapless::String<32>,
        /// Configured tick in nanoseconds
        tick_ns: u64,
        /// Shortest step interval of the axis in nanoseconds
        min_interval_ns: u64,
    },
    /// Actuation time plus margin does not fit in a millisecond counter
    DwellOverflow,
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Axis hardware and registration errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Pin operation failed
    PinError,
    /// Controller already holds its maximum number of axes
    AxisLimitReached(usize),
}

/// Coordinated move errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Move command cardinality differs from the registered axis set
    AxisCountMismatch {
        /// Number of targets in the command
        expected: usize,
        /// Number of registered axes
        actual: usize,
    },
    /// Move duration computation overflow
    Overflow,
}

/// Actuation sequence errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// `run` was called before the axes were initialized
    NotInitialized,
    /// The sequence already ran to completion in this power cycle
    AlreadyComplete,
    /// A previous run failed part-way and cannot be resumed
    Aborted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
            Error::Sequence(e) => write!(f, "Sequence error: {}", e),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::StepAngle => "step angle",
            Parameter::DistancePerRevolution => "distance per revolution",
            Parameter::RatedRpm => "rated rpm",
            Parameter::TravelDistance => "travel distance",
            Parameter::MaxStepRate => "max step rate",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidConfiguration { parameter, value } => {
                write!(f, "Invalid {}: {}. Must be finite and > 0", parameter, value)
            }
            ConfigError::InvalidTickPeriod(v) => write!(f, "Invalid tick period: {} ns. Must be > 0", v),
            ConfigError::TickTooCoarse { axis, tick_ns, min_interval_ns } => write!(
                f,
                "Tick of {} ns exceeds the {} ns step interval of axis '{}'",
                tick_ns, min_interval_ns, axis
            ),
            ConfigError::DwellOverflow => write!(f, "Actuation time plus margin overflows"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
            MotorError::AxisLimitReached(max) => write!(f, "Controller is full ({} axes)", max),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::AxisCountMismatch { expected, actual } => {
                write!(f, "Move command has {} targets for {} registered axes", expected, actual)
            }
            MotionError::Overflow => write!(f, "Move duration computation overflow"),
        }
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::NotInitialized => write!(f, "Axes not initialized"),
            SequenceError::AlreadyComplete => write!(f, "Sequence already completed"),
            SequenceError::Aborted => write!(f, "Sequence aborted by an earlier failure"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

impl From<SequenceError> for Error {
    fn from(e: SequenceError) -> Self {
        Error::Sequence(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}

#[cfg(feature = "std")]
impl std::error::Error for SequenceError {}
