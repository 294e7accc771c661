//! Coordinated move profile.
//!
//! Constant-rate moves only: a coordinated move lasts as long as its slowest
//! axis needs at its own ceiling, and every other axis is slowed so it
//! arrives at the same instant.

use crate::config::units::StepsPerSec;
use crate::error::{MotionError, Result};

/// Direction of axis motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward increasing step positions.
    Forward,
    /// Toward decreasing step positions.
    Reverse,
}

impl Direction {
    /// Get direction from signed step count.
    #[inline]
    pub fn from_steps(steps: i64) -> Self {
        if steps >= 0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

/// Timing shared by every axis of one coordinated move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatedProfile {
    /// Move duration in nanoseconds (0 when nothing moves).
    pub duration_ns: u64,

    /// Index of the axis that sets the duration, `None` when nothing moves.
    pub pacing_axis: Option<usize>,
}

impl CoordinatedProfile {
    /// Plan a move from `(steps, min_step_interval_ns)` per axis.
    ///
    /// The duration is `max(steps_i × min_interval_i)`; ties go to the lowest
    /// index, so with equal ceilings the axis with the most steps paces.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::Overflow` if a duration does not fit in `u64`.
    pub fn plan<I>(axes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u64, u64)>,
    {
        let mut profile = Self::zero();

        for (index, (steps, min_interval_ns)) in axes.into_iter().enumerate() {
            if steps == 0 {
                continue;
            }
            let duration = steps
                .checked_mul(min_interval_ns)
                .ok_or(MotionError::Overflow)?;
            if duration > profile.duration_ns {
                profile.duration_ns = duration;
                profile.pacing_axis = Some(index);
            }
        }

        Ok(profile)
    }

    /// A profile with nothing to move.
    pub const fn zero() -> Self {
        Self {
            duration_ns: 0,
            pacing_axis: None,
        }
    }

    /// Check if no axis moves.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.pacing_axis.is_none()
    }

    /// Effective rate for an axis covering `steps` in this profile.
    pub fn rate_for(&self, steps: u64) -> StepsPerSec {
        if self.duration_ns == 0 {
            StepsPerSec(0.0)
        } else {
            StepsPerSec(steps as f64 * 1e9 / self.duration_ns as f64)
        }
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.duration_ns as f64 / 1e9
    }
}
