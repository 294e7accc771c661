//! Per-axis step schedule for a constant-rate move.

use crate::config::units::StepsPerSec;

use super::profile::Direction;

/// Runtime state of one axis during a move.
///
/// Pulse `k` (1-based) of an `n`-step move starting at `t0` and lasting `D`
/// falls due at `t0 + ceil(k·D / n)`. Every axis sharing `t0` and `D` is
/// therefore due for its final pulse at exactly `t0 + D`, and the pulses
/// emitted by time `t` never exceed `(t − t0)·n / D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSchedule {
    start_ns: u64,
    duration_ns: u64,
    total_steps: u64,
    steps_taken: u64,
    direction: Direction,
}

impl StepSchedule {
    /// Create a schedule for `delta` signed steps.
    pub fn new(start_ns: u64, duration_ns: u64, delta: i64) -> Self {
        Self {
            start_ns,
            duration_ns,
            total_steps: delta.unsigned_abs(),
            steps_taken: 0,
            direction: Direction::from_steps(delta),
        }
    }

    /// Check if every step has been taken.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.steps_taken >= self.total_steps
    }

    /// Direction of the move.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Total steps in the move.
    #[inline]
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Steps taken so far.
    #[inline]
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Steps remaining.
    #[inline]
    pub fn steps_remaining(&self) -> u64 {
        self.total_steps.saturating_sub(self.steps_taken)
    }

    /// Move start time.
    #[inline]
    pub fn start_ns(&self) -> u64 {
        self.start_ns
    }

    /// Move duration.
    #[inline]
    pub fn duration_ns(&self) -> u64 {
        self.duration_ns
    }

    /// Time the next pulse falls due, `None` once complete.
    pub fn next_due_ns(&self) -> Option<u64> {
        if self.is_complete() {
            return None;
        }
        let k = u128::from(self.steps_taken + 1);
        let n = u128::from(self.total_steps);
        let offset = (k * u128::from(self.duration_ns) + n - 1) / n;
        Some(self.start_ns.saturating_add(offset as u64))
    }

    /// Check if the next pulse is due at `now_ns`.
    #[inline]
    pub fn is_due(&self, now_ns: u64) -> bool {
        self.next_due_ns().map(|due| now_ns >= due).unwrap_or(false)
    }

    /// Record one emitted pulse.
    ///
    /// Returns `true` if more steps remain.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.steps_taken += 1;
        !self.is_complete()
    }

    /// Average step rate of this schedule.
    pub fn step_rate(&self) -> StepsPerSec {
        if self.duration_ns == 0 {
            StepsPerSec(0.0)
        } else {
            StepsPerSec(self.total_steps as f64 * 1e9 / self.duration_ns as f64)
        }
    }

    /// Get progress as a fraction (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.total_steps == 0 {
            1.0
        } else {
            self.steps_taken as f32 / self.total_steps as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_times_evenly_spaced() {
        let mut schedule = StepSchedule::new(1_000, 4_000, 4);
        let mut dues = [0u64; 4];
        for due in dues.iter_mut() {
            *due = schedule.next_due_ns().unwrap();
            schedule.advance();
        }
        assert_eq!(dues, [2_000, 3_000, 4_000, 5_000]);
        assert!(schedule.is_complete());
        assert_eq!(schedule.next_due_ns(), None);
    }

    #[test]
    fn test_due_times_round_up() {
        // 3 steps in 10 ns: 3.33, 6.67, 10
        let mut schedule = StepSchedule::new(0, 10, -3);
        assert_eq!(schedule.direction(), Direction::Reverse);
        assert_eq!(schedule.next_due_ns(), Some(4));
        schedule.advance();
        assert_eq!(schedule.next_due_ns(), Some(7));
        schedule.advance();
        assert_eq!(schedule.next_due_ns(), Some(10));
    }

    #[test]
    fn test_final_pulse_shared_by_all_rates() {
        for steps in [1i64, 7, 333, 62_500, 187_500] {
            let mut schedule = StepSchedule::new(0, 140_625_000_000, steps);
            while schedule.steps_remaining() > 1 {
                schedule.advance();
            }
            assert_eq!(schedule.next_due_ns(), Some(140_625_000_000));
        }
    }

    #[test]
    fn test_is_due() {
        let schedule = StepSchedule::new(0, 1_000, 1);
        assert!(!schedule.is_due(999));
        assert!(schedule.is_due(1_000));
    }

    #[test]
    fn test_zero_schedule() {
        let mut schedule = StepSchedule::new(0, 0, 0);
        assert!(schedule.is_complete());
        assert!(!schedule.advance());
        assert_eq!(schedule.progress(), 1.0);
        assert!(!schedule.is_due(u64::MAX));
    }

    #[test]
    fn test_step_rate() {
        let schedule = StepSchedule::new(0, 1_000_000_000, 500);
        assert!((schedule.step_rate().0 - 500.0).abs() < 1e-9);
    }
}
