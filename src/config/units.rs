//! Unit types for physical quantities.
//!
//! Provides type-safe representations of angles, linear distances, motor
//! speeds and step counts to prevent unit confusion at compile time.
//!
//! Physical quantities are `f64`: decimal configuration values such as
//! `0.8` mm must survive the step-count computation without losing a step.

use serde::Deserialize;

/// Angle in degrees (used for the motor step angle).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Linear distance in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl Millimeters {
    /// Create a new Millimeters value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Rotational speed in revolutions per minute.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Rpm(pub f64);

impl Rpm {
    /// Create a new Rpm value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Step rate in steps per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct StepsPerSec(pub f64);

impl StepsPerSec {
    /// Create a new StepsPerSec value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Shortest whole-nanosecond step interval that stays at or below this rate.
    ///
    /// Returns `None` for non-positive or non-finite rates, and for rates so
    /// slow that the interval does not fit in a `u64`.
    pub fn min_interval_ns(self) -> Option<u64> {
        if !self.0.is_finite() || self.0 <= 0.0 {
            return None;
        }
        // The 1e-6 slack keeps exact quotients such as 750000.0000000001 at 750000.
        let interval = libm::ceil(1_000_000_000.0 / self.0 - 1e-6);
        if interval >= u64::MAX as f64 {
            None
        } else {
            Some(interval.max(1.0) as u64)
        }
    }
}

/// Axis position or distance in steps (absolute from origin).
///
/// Uses i64 for unlimited range in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct Steps(pub i64);

impl Steps {
    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Get absolute value as u64.
    #[inline]
    pub fn abs(self) -> u64 {
        self.0.unsigned_abs()
    }
}

impl From<i64> for Steps {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
