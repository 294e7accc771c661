//! Capping solenoid output.

use embedded_hal::digital::OutputPin;

use crate::error::{MotorError, Result};

/// Single-pin solenoid, energized by driving the pin high.
pub struct Solenoid<P: OutputPin> {
    pin: P,
    energized: bool,
}

impl<P: OutputPin> Solenoid<P> {
    /// Wrap a pin. The pin is not written until the first command.
    pub fn new(pin: P) -> Self {
        Self { pin, energized: false }
    }

    /// Drive the solenoid.
    pub fn energize(&mut self) -> Result<()> {
        self.pin.set_high().map_err(|_| MotorError::PinError)?;
        self.energized = true;
        Ok(())
    }

    /// Release the solenoid.
    pub fn de_energize(&mut self) -> Result<()> {
        self.pin.set_low().map_err(|_| MotorError::PinError)?;
        self.energized = false;
        Ok(())
    }

    /// Last commanded state.
    #[inline]
    pub fn is_energized(&self) -> bool {
        self.energized
    }

    /// Recover the pin.
    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    #[test]
    fn test_energize_then_release() {
        let pin = PinMock::new(&[Transaction::set(State::High), Transaction::set(State::Low)]);
        let mut solenoid = Solenoid::new(pin);
        assert!(!solenoid.is_energized());

        solenoid.energize().unwrap();
        assert!(solenoid.is_energized());
        solenoid.de_energize().unwrap();
        assert!(!solenoid.is_energized());

        solenoid.release().done();
    }

    #[test]
    fn test_construction_writes_nothing() {
        let pin = PinMock::new(&[]);
        let solenoid = Solenoid::new(pin);
        solenoid.release().done();
    }
}
