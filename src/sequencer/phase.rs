//! Phases of the capping cycle.

use core::fmt;

/// Position of the sequencer in its single pass.
///
/// Phases only ever advance; [`SequencePhase::Done`] is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencePhase {
    /// Axes not yet registered or enabled.
    #[default]
    Init,
    /// Both axes travel to the work position.
    MoveToWorkPosition,
    /// Solenoid energized.
    ActuateOn,
    /// Waiting for the cap to seat.
    HoldEngaged,
    /// Solenoid released.
    ActuateOff,
    /// Waiting for the plunger to clear.
    HoldReleased,
    /// Head returns to origin.
    ReturnAxis,
    /// Pause before the completion notice.
    Settle,
    /// Cycle complete.
    Done,
}

impl SequencePhase {
    /// The phase that follows this one.
    pub fn next(self) -> Self {
        match self {
            SequencePhase::Init => SequencePhase::MoveToWorkPosition,
            SequencePhase::MoveToWorkPosition => SequencePhase::ActuateOn,
            SequencePhase::ActuateOn => SequencePhase::HoldEngaged,
            SequencePhase::HoldEngaged => SequencePhase::ActuateOff,
            SequencePhase::ActuateOff => SequencePhase::HoldReleased,
            SequencePhase::HoldReleased => SequencePhase::ReturnAxis,
            SequencePhase::ReturnAxis => SequencePhase::Settle,
            SequencePhase::Settle | SequencePhase::Done => SequencePhase::Done,
        }
    }

    /// Check if the cycle has finished.
    #[inline]
    pub fn is_done(self) -> bool {
        self == SequencePhase::Done
    }

    /// Log-friendly name.
    pub fn as_str(self) -> &'static str {
        match self {
            SequencePhase::Init => "init",
            SequencePhase::MoveToWorkPosition => "move to work position",
            SequencePhase::ActuateOn => "actuate on",
            SequencePhase::HoldEngaged => "hold engaged",
            SequencePhase::ActuateOff => "actuate off",
            SequencePhase::HoldReleased => "hold released",
            SequencePhase::ReturnAxis => "return axis",
            SequencePhase::Settle => "settle",
            SequencePhase::Done => "done",
        }
    }
}

impl fmt::Display for SequencePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
