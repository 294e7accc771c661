//! Single stepper axis with position tracking and rate-limited stepping.

use heapless::String;

use crate::config::step_interval;
use crate::config::units::{Steps, StepsPerSec};
use crate::error::Result;
use crate::motion::{Direction, StepSchedule};

use super::output::StepOutput;

/// One stepper axis.
///
/// Owns its [`StepOutput`] and all run-time state. A move is requested with
/// [`Axis::request_move`] and executed by polling [`Axis::step_if_due`]; each
/// poll emits at most one pulse.
pub struct Axis<O: StepOutput> {
    /// Physical step/direction output.
    output: O,

    /// Axis name for logging.
    name: String<32>,

    /// Current position in steps from the power-on origin.
    position: i64,

    /// Pending or active target.
    target: i64,

    /// Step rate ceiling.
    max_step_rate: StepsPerSec,

    /// Shortest step interval honoring the ceiling.
    min_interval_ns: u64,

    /// Last direction written to the output (avoids redundant pin writes).
    current_direction: Option<Direction>,

    /// Timing of the move in progress, if any.
    schedule: Option<StepSchedule>,
}

impl<O: StepOutput> Axis<O> {
    /// Register an axis with a fixed step rate ceiling, at position 0.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the rate is not finite and positive,
    /// or so slow that its step interval does not fit in a `u64`.
    pub fn new(output: O, max_step_rate: StepsPerSec) -> Result<Self> {
        let min_interval_ns = step_interval(max_step_rate)?;

        Ok(Self {
            output,
            name: String::try_from("axis").unwrap_or_default(),
            position: 0,
            target: 0,
            max_step_rate,
            min_interval_ns,
            current_direction: None,
            schedule: None,
        })
    }

    /// Set the axis name.
    pub fn named(mut self, name: &str) -> Self {
        if let Ok(name) = String::try_from(name) {
            self.name = name;
        }
        self
    }

    /// Get the axis name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Steps {
        Steps(self.position)
    }

    /// Pending or active target.
    #[inline]
    pub fn target(&self) -> Steps {
        Steps(self.target)
    }

    /// Step rate ceiling.
    #[inline]
    pub fn max_step_rate(&self) -> StepsPerSec {
        self.max_step_rate
    }

    /// Shortest step interval in nanoseconds.
    #[inline]
    pub fn min_interval_ns(&self) -> u64 {
        self.min_interval_ns
    }

    /// `target − position`, signed.
    #[inline]
    pub fn distance_remaining(&self) -> i64 {
        self.target - self.position
    }

    /// Check if the axis sits on its target.
    #[inline]
    pub fn at_target(&self) -> bool {
        self.distance_remaining() == 0
    }

    /// Rate of the move in progress, or zero when idle.
    pub fn step_rate(&self) -> StepsPerSec {
        self.schedule
            .as_ref()
            .map(|s| s.step_rate())
            .unwrap_or_default()
    }

    /// Timing of the move in progress.
    #[inline]
    pub fn schedule(&self) -> Option<&StepSchedule> {
        self.schedule.as_ref()
    }

    /// Power the driver.
    pub fn enable(&mut self) -> Result<()> {
        self.output.enable()
    }

    /// Record a new target without moving.
    ///
    /// Drops any schedule in progress; the next move is planned afresh.
    pub fn request_move(&mut self, target: Steps) {
        self.target = target.0;
        self.schedule = None;
    }

    /// Declare the current location to be `position` (e.g. a new origin).
    ///
    /// Also sets the target, so the axis is at rest afterwards.
    pub fn set_position(&mut self, position: Steps) {
        self.position = position.0;
        self.target = position.0;
        self.schedule = None;
    }

    /// Time the pending move to start at `start_ns` and last `duration_ns`.
    ///
    /// Durations shorter than the axis can manage at its ceiling are
    /// stretched to that minimum.
    pub fn schedule_move(&mut self, start_ns: u64, duration_ns: u64) {
        let delta = self.distance_remaining();
        let minimum = delta
            .unsigned_abs()
            .saturating_mul(self.min_interval_ns);
        self.schedule = Some(StepSchedule::new(start_ns, duration_ns.max(minimum), delta));
    }

    /// Emit one step toward the target if one is due at `now_ns`.
    ///
    /// Without a prior [`Axis::schedule_move`] the axis paces itself at its
    /// ceiling from the first call. Returns `true` if a pulse was emitted.
    pub fn step_if_due(&mut self, now_ns: u64) -> Result<bool> {
        if self.at_target() {
            self.schedule = None;
            return Ok(false);
        }

        if self.schedule.is_none() {
            self.schedule_move(now_ns, 0);
        }

        let (due, direction) = match self.schedule.as_ref() {
            Some(schedule) => (schedule.is_due(now_ns), schedule.direction()),
            None => return Ok(false),
        };
        if !due {
            return Ok(false);
        }

        if self.current_direction != Some(direction) {
            self.output.set_direction(direction)?;
            self.current_direction = Some(direction);
        }
        self.output.step()?;
        self.position += direction.sign();

        let more = self.schedule.as_mut().map(|s| s.advance()).unwrap_or(false);
        if !more {
            self.schedule = None;
        }
        Ok(true)
    }

    /// Borrow the output.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Recover the output.
    pub fn into_output(self) -> O {
        self.output
    }
}
