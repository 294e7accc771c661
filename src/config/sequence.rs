//! Solenoid dwell, scheduling and logging settings from TOML.

use serde::Deserialize;

use crate::diagnostics::Verbosity;

/// Extra time added to the solenoid actuation time for each dwell.
pub const DEFAULT_MARGIN_MS: u32 = 40;

/// Pause between the return move and the completion notice.
pub const DEFAULT_SETTLE_MS: u32 = 500;

/// Default scheduling tick (50 µs).
pub const DEFAULT_TICK_NS: u64 = 50_000;

/// Solenoid actuation timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SolenoidConfig {
    /// Time the actuator needs to complete its stroke (cap seating).
    pub actuation_ms: u32,

    /// Extra margin added to the actuation time.
    #[serde(default = "default_margin_ms")]
    pub margin_ms: u32,

    /// Pause after the return move before reporting completion.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u32,
}

fn default_margin_ms() -> u32 {
    DEFAULT_MARGIN_MS
}

fn default_settle_ms() -> u32 {
    DEFAULT_SETTLE_MS
}

impl SolenoidConfig {
    /// Hold duration used after energizing and after releasing.
    ///
    /// Returns `None` if actuation time plus margin overflows.
    #[inline]
    pub fn dwell_ms(&self) -> Option<u32> {
        self.actuation_ms.checked_add(self.margin_ms)
    }
}

impl Default for SolenoidConfig {
    fn default() -> Self {
        Self {
            actuation_ms: 1000,
            margin_ms: DEFAULT_MARGIN_MS,
            settle_ms: DEFAULT_SETTLE_MS,
        }
    }
}

/// Scheduling parameters for coordinated moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    /// Period between two scheduling ticks in nanoseconds.
    #[serde(default = "default_tick_ns")]
    pub tick_ns: u64,
}

fn default_tick_ns() -> u64 {
    DEFAULT_TICK_NS
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { tick_ns: DEFAULT_TICK_NS }
    }
}

/// Diagnostic output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct LoggingConfig {
    /// Most detailed level that reaches the sink.
    #[serde(default)]
    pub verbosity: Verbosity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dwell_includes_margin() {
        let solenoid = SolenoidConfig::default();
        assert_eq!(solenoid.dwell_ms(), Some(1040));
    }

    #[test]
    fn test_dwell_overflow() {
        let solenoid = SolenoidConfig {
            actuation_ms: u32::MAX,
            margin_ms: 1,
            settle_ms: 0,
        };
        assert_eq!(solenoid.dwell_ms(), None);
    }
}
