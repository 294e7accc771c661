//! Step-pulse outputs.
//!
//! [`StepOutput`] turns a logical "one step" into physical I/O. The standard
//! implementation drives STEP/DIR/ENABLE pins of a step-direction driver
//! through embedded-hal 1.0.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::AxisConfig;
use crate::error::{MotorError, Result};
use crate::motion::Direction;

/// Default STEP pulse width (A4988/DRV8825 need ≥ 1-2 µs).
pub const DEFAULT_PULSE_WIDTH_NS: u32 = 2_000;

/// Physical side of one axis.
pub trait StepOutput {
    /// Power the motor driver.
    fn enable(&mut self) -> Result<()>;

    /// Set the direction for subsequent steps.
    fn set_direction(&mut self, direction: Direction) -> Result<()>;

    /// Emit one step pulse.
    fn step(&mut self) -> Result<()>;
}

/// Step-direction driver wired to three output pins.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `EN`: driver ENABLE pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider for the pulse width (must implement `DelayNs`)
pub struct StepDirOutput<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    step_pin: STEP,
    dir_pin: DIR,
    enable_pin: EN,
    delay: DELAY,
    invert_direction: bool,
    enable_active_low: bool,
    pulse_width_ns: u32,
}

impl<STEP, DIR, EN, DELAY> StepDirOutput<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// Create an output with active-low enable and non-inverted direction.
    pub fn new(step_pin: STEP, dir_pin: DIR, enable_pin: EN, delay: DELAY) -> Self {
        Self {
            step_pin,
            dir_pin,
            enable_pin,
            delay,
            invert_direction: false,
            enable_active_low: true,
            pulse_width_ns: DEFAULT_PULSE_WIDTH_NS,
        }
    }

    /// Apply the wiring options of an axis configuration.
    pub fn configured(self, config: &AxisConfig) -> Self {
        self.invert_direction(config.invert_direction)
            .enable_active_low(config.enable_active_low)
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Set enable polarity.
    pub fn enable_active_low(mut self, active_low: bool) -> Self {
        self.enable_active_low = active_low;
        self
    }

    /// Set STEP pulse width in nanoseconds.
    pub fn pulse_width_ns(mut self, width_ns: u32) -> Self {
        self.pulse_width_ns = width_ns;
        self
    }

    /// Power the driver down.
    pub fn disable(&mut self) -> Result<()> {
        self.write_enable(false)
    }

    /// Release the pins and delay.
    pub fn release(self) -> (STEP, DIR, EN, DELAY) {
        (self.step_pin, self.dir_pin, self.enable_pin, self.delay)
    }

    fn write_enable(&mut self, enabled: bool) -> Result<()> {
        let high = enabled != self.enable_active_low;
        if high {
            self.enable_pin.set_high().map_err(|_| MotorError::PinError)?;
        } else {
            self.enable_pin.set_low().map_err(|_| MotorError::PinError)?;
        }
        Ok(())
    }
}

impl<STEP, DIR, EN, DELAY> StepOutput for StepDirOutput<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    fn enable(&mut self) -> Result<()> {
        self.write_enable(true)
    }

    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        let pin_high = match direction {
            Direction::Forward => !self.invert_direction,
            Direction::Reverse => self.invert_direction,
        };

        if pin_high {
            self.dir_pin.set_high().map_err(|_| MotorError::PinError)?;
        } else {
            self.dir_pin.set_low().map_err(|_| MotorError::PinError)?;
        }
        Ok(())
    }

    fn step(&mut self) -> Result<()> {
        self.step_pin.set_high().map_err(|_| MotorError::PinError)?;
        self.delay.delay_ns(self.pulse_width_ns);
        self.step_pin.set_low().map_err(|_| MotorError::PinError)?;
        Ok(())
    }
}
