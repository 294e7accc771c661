//! Time sources for step scheduling.

use embedded_hal::delay::DelayNs;

/// Monotonic time source read once per scheduling tick.
pub trait Clock {
    /// Nanoseconds since a clock-specific reference point.
    ///
    /// Successive readings must never decrease.
    fn now_ns(&mut self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now_ns(&mut self) -> u64 {
        (**self).now_ns()
    }
}

/// Clock for targets without a free-running timer.
///
/// Each reading busy-waits one tick on the wrapped delay and returns the
/// accumulated tick count, so the stepping loop runs at a fixed cadence. Time
/// spent emitting pulses between readings is not accounted for.
#[derive(Debug)]
pub struct DelayClock<D: DelayNs> {
    delay: D,
    tick_ns: u32,
    elapsed_ns: u64,
}

impl<D: DelayNs> DelayClock<D> {
    /// Create a clock advancing `tick_ns` per reading.
    pub fn new(delay: D, tick_ns: u32) -> Self {
        Self {
            delay,
            tick_ns: tick_ns.max(1),
            elapsed_ns: 0,
        }
    }

    /// Tick period in nanoseconds.
    #[inline]
    pub fn tick_ns(&self) -> u32 {
        self.tick_ns
    }

    /// Recover the wrapped delay.
    pub fn into_inner(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> Clock for DelayClock<D> {
    fn now_ns(&mut self) -> u64 {
        self.delay.delay_ns(self.tick_ns);
        self.elapsed_ns += u64::from(self.tick_ns);
        self.elapsed_ns
    }
}

/// Simulated clock advancing a fixed tick per reading without waiting.
///
/// Makes coordinated moves deterministic on a host: reading `n` returns
/// `start + n * tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickClock {
    tick_ns: u64,
    now_ns: u64,
    readings: u64,
}

impl TickClock {
    /// Create a clock starting at zero.
    pub fn new(tick_ns: u64) -> Self {
        Self::starting_at(0, tick_ns)
    }

    /// Create a clock whose first reading is `start_ns + tick_ns`.
    pub fn starting_at(start_ns: u64, tick_ns: u64) -> Self {
        Self {
            tick_ns: tick_ns.max(1),
            now_ns: start_ns,
            readings: 0,
        }
    }

    /// Number of readings taken so far.
    #[inline]
    pub fn readings(&self) -> u64 {
        self.readings
    }

    /// Most recent reading.
    #[inline]
    pub fn elapsed_ns(&self) -> u64 {
        self.now_ns
    }
}

impl Clock for TickClock {
    fn now_ns(&mut self) -> u64 {
        self.now_ns += self.tick_ns;
        self.readings += 1;
        self.now_ns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;

    #[test]
    fn test_tick_clock_advances() {
        let mut clock = TickClock::new(50_000);
        assert_eq!(clock.now_ns(), 50_000);
        assert_eq!(clock.now_ns(), 100_000);
        assert_eq!(clock.readings(), 2);
    }

    #[test]
    fn test_tick_clock_offset() {
        let mut clock = TickClock::starting_at(1_000, 10);
        assert_eq!(clock.now_ns(), 1_010);
        assert_eq!(clock.elapsed_ns(), 1_010);
    }

    #[test]
    fn test_delay_clock_accumulates() {
        let mut clock = DelayClock::new(NoopDelay::new(), 25_000);
        clock.now_ns();
        clock.now_ns();
        assert_eq!(clock.now_ns(), 75_000);
    }

    #[test]
    fn test_zero_tick_clamped() {
        let mut clock = TickClock::new(0);
        assert!(clock.now_ns() > 0);
        assert_eq!(DelayClock::new(NoopDelay::new(), 0).tick_ns(), 1);
    }
}
