//! Coordinated multi-axis controller.
//!
//! Drives a fixed set of axes so that every axis of a move starts together
//! and arrives on the same scheduling tick.

use heapless::Vec;

use crate::clock::Clock;
use crate::config::units::Steps;
use crate::error::{MotionError, MotorError, Result};
use crate::motion::CoordinatedProfile;

use super::axis::Axis;
use super::output::StepOutput;

/// Target positions for one coordinated move, one per axis in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand<const N: usize> {
    targets: [Steps; N],
}

impl<const N: usize> MoveCommand<N> {
    /// Create a command from raw step targets.
    pub fn new(targets: [i64; N]) -> Self {
        Self {
            targets: targets.map(Steps),
        }
    }

    /// Create a command from typed targets.
    pub fn from_steps(targets: [Steps; N]) -> Self {
        Self { targets }
    }

    /// Targets in axis order.
    #[inline]
    pub fn targets(&self) -> &[Steps; N] {
        &self.targets
    }
}

/// Outcome of [`MultiAxisController::run_to_position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveStats<const N: usize> {
    /// Clock readings taken by the move.
    pub ticks: u64,

    /// Planned move duration in nanoseconds.
    pub duration_ns: u64,

    /// Pulses emitted per axis.
    pub pulses: [u64; N],

    /// Tick (1-based) on which each axis reached its target; 0 if it did not move.
    pub finish_tick: [u64; N],

    /// Axis that set the move duration.
    pub pacing_axis: Option<usize>,
}

impl<const N: usize> MoveStats<N> {
    fn idle() -> Self {
        Self {
            ticks: 0,
            duration_ns: 0,
            pulses: [0; N],
            finish_tick: [0; N],
            pacing_axis: None,
        }
    }

    /// Total pulses over all axes.
    pub fn total_pulses(&self) -> u64 {
        self.pulses.iter().sum()
    }
}

/// Controller owning up to `N` axes and moving them in lock-step.
///
/// # Example
///
/// ```rust,ignore
/// let mut controller: MultiAxisController<_, 2> = MultiAxisController::new();
/// controller.add_axis(carriage)?;
/// controller.add_axis(head)?;
///
/// controller.move_to(&MoveCommand::new([187_500, 62_500]))?;
/// controller.run_to_position(&mut clock)?;
/// ```
pub struct MultiAxisController<O: StepOutput, const N: usize> {
    axes: Vec<Axis<O>, N>,
    profile: CoordinatedProfile,
}

impl<O: StepOutput, const N: usize> Default for MultiAxisController<O, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: StepOutput, const N: usize> MultiAxisController<O, N> {
    /// Create an empty controller.
    pub fn new() -> Self {
        Self {
            axes: Vec::new(),
            profile: CoordinatedProfile::zero(),
        }
    }

    /// Register an axis; returns its index in move commands.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::AxisLimitReached` when `N` axes are registered.
    pub fn add_axis(&mut self, axis: Axis<O>) -> Result<usize> {
        self.axes
            .push(axis)
            .map_err(|_| MotorError::AxisLimitReached(N))?;
        Ok(self.axes.len() - 1)
    }

    /// Number of registered axes.
    #[inline]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Check if no axis is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Get an axis by index.
    pub fn axis(&self, index: usize) -> Option<&Axis<O>> {
        self.axes.get(index)
    }

    /// All axes in registration order.
    pub fn axes(&self) -> &[Axis<O>] {
        &self.axes
    }

    /// Current positions in axis order (unregistered slots read 0).
    pub fn positions(&self) -> [Steps; N] {
        let mut positions = [Steps(0); N];
        for (slot, axis) in positions.iter_mut().zip(self.axes.iter()) {
            *slot = axis.position();
        }
        positions
    }

    /// Axis pacing the pending move.
    #[inline]
    pub fn pacing_axis(&self) -> Option<usize> {
        self.profile.pacing_axis
    }

    /// Duration of the pending move in nanoseconds.
    #[inline]
    pub fn move_duration_ns(&self) -> u64 {
        self.profile.duration_ns
    }

    /// Check if any axis still has distance to go.
    pub fn is_moving(&self) -> bool {
        self.axes.iter().any(|a| !a.at_target())
    }

    /// Power every driver.
    pub fn enable_all(&mut self) -> Result<()> {
        for axis in self.axes.iter_mut() {
            axis.enable()?;
        }
        Ok(())
    }

    /// Set new targets for every axis and plan a coordinated move.
    ///
    /// Nothing moves until [`MultiAxisController::run_to_position`].
    ///
    /// # Errors
    ///
    /// Returns `MotionError::AxisCountMismatch` unless exactly `N` axes are
    /// registered, or `MotionError::Overflow` when a distance or the duration
    /// is unrepresentable.
    pub fn move_to(&mut self, command: &MoveCommand<N>) -> Result<()> {
        if self.axes.len() != N {
            return Err(MotionError::AxisCountMismatch {
                expected: N,
                actual: self.axes.len(),
            }
            .into());
        }

        let mut moves = [(0u64, 0u64); N];
        for ((slot, target), axis) in moves
            .iter_mut()
            .zip(command.targets().iter())
            .zip(self.axes.iter())
        {
            let delta = target
                .0
                .checked_sub(axis.position().0)
                .ok_or(MotionError::Overflow)?;
            *slot = (delta.unsigned_abs(), axis.min_interval_ns());
        }
        let profile = CoordinatedProfile::plan(moves)?;

        for (axis, target) in self.axes.iter_mut().zip(command.targets().iter()) {
            axis.request_move(*target);
        }
        self.profile = profile;
        Ok(())
    }

    /// Step every axis to its target (blocking).
    ///
    /// Reads `clock` once per scheduling tick and polls each axis. Returns
    /// without reading the clock when no axis has to move.
    pub fn run_to_position<C: Clock>(&mut self, clock: &mut C) -> Result<MoveStats<N>> {
        let mut stats = MoveStats::idle();
        if !self.is_moving() {
            self.profile = CoordinatedProfile::zero();
            return Ok(stats);
        }

        stats.duration_ns = self.profile.duration_ns;
        stats.pacing_axis = self.profile.pacing_axis;

        // Due times are relative to this reading, so the first pulse lands a
        // full interval after it.
        let start_ns = clock.now_ns();
        for axis in self.axes.iter_mut() {
            if !axis.at_target() {
                axis.schedule_move(start_ns, self.profile.duration_ns);
            }
        }

        while self.is_moving() {
            let now_ns = clock.now_ns();
            stats.ticks += 1;

            for (index, axis) in self.axes.iter_mut().enumerate() {
                if axis.step_if_due(now_ns)? {
                    stats.pulses[index] += 1;
                    if axis.at_target() {
                        stats.finish_tick[index] = stats.ticks;
                    }
                }
            }
        }

        self.profile = CoordinatedProfile::zero();
        Ok(stats)
    }

    /// Dismantle the controller, returning its axes in registration order.
    pub fn into_axes(self) -> Vec<Axis<O>, N> {
        self.axes
    }

    /// [`MultiAxisController::move_to`] followed by
    /// [`MultiAxisController::run_to_position`].
    pub fn move_to_blocking<C: Clock>(
        &mut self,
        command: &MoveCommand<N>,
        clock: &mut C,
    ) -> Result<MoveStats<N>> {
        self.move_to(command)?;
        self.run_to_position(clock)
    }
}
