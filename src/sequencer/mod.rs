//! Capping cycle sequencer.
//!
//! Runs the station's single pass: carriage and head travel together to the
//! work position, the solenoid seats the cap, the head returns to its origin
//! and the cycle reports completion. The carriage stays at the work position.

mod phase;
mod solenoid;

pub use phase::SequencePhase;
pub use solenoid::Solenoid;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::String;

use crate::clock::Clock;
use crate::config::units::Steps;
use crate::config::{validate_config, SequenceConfig};
use crate::diagnostics::Logger;
use crate::error::{ConfigError, Error, Result, SequenceError};
use crate::kinematics::AxisKinematics;
use crate::motor::{Axis, MoveCommand, MoveStats, MultiAxisController, StepOutput};

/// Index of the carriage in every move command.
pub const CARRIAGE: usize = 0;

/// Index of the head in every move command.
pub const HEAD: usize = 1;

/// What a completed cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceReport {
    /// Move from origin to the work position.
    pub work_move: MoveStats<2>,

    /// Move returning the head to its origin.
    pub return_move: MoveStats<2>,

    /// Hold time after energizing and after releasing, in milliseconds.
    pub dwell_ms: u32,

    /// Axis positions at the end of the cycle.
    pub final_positions: [Steps; 2],
}

/// Single-pass capping sequencer.
///
/// # Example
///
/// ```rust,ignore
/// let mut sequencer = Sequencer::new(&config, FmtLogger::new(uart, Verbosity::Info))?;
/// let mut controller = sequencer.init([carriage_output, head_output])?;
/// let report = sequencer.run(&mut controller, &mut solenoid, &mut delay, &mut clock)?;
/// ```
pub struct Sequencer<L: Logger> {
    kinematics: [AxisKinematics; 2],
    names: [String<32>; 2],
    dwell_ms: u32,
    settle_ms: u32,
    phase: SequencePhase,
    aborted: bool,
    logger: L,
}

impl<L: Logger> Sequencer<L> {
    /// Validate `config` and derive both axes' kinematics.
    pub fn new(config: &SequenceConfig, logger: L) -> Result<Self> {
        validate_config(config)?;

        let carriage = AxisKinematics::from_spec(&config.carriage.spec()?)?;
        let head = AxisKinematics::from_spec(&config.head.spec()?)?;
        let dwell_ms = config.solenoid.dwell_ms().ok_or(ConfigError::DwellOverflow)?;

        Ok(Self {
            kinematics: [carriage, head],
            names: [config.carriage.name.clone(), config.head.name.clone()],
            dwell_ms,
            settle_ms: config.solenoid.settle_ms,
            phase: SequencePhase::Init,
            aborted: false,
            logger,
        })
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> SequencePhase {
        self.phase
    }

    /// Kinematics of carriage and head.
    #[inline]
    pub fn kinematics(&self) -> &[AxisKinematics; 2] {
        &self.kinematics
    }

    /// Hold time used after each solenoid transition.
    #[inline]
    pub fn dwell_ms(&self) -> u32 {
        self.dwell_ms
    }

    /// Pause before the completion notice.
    #[inline]
    pub fn settle_ms(&self) -> u32 {
        self.settle_ms
    }

    /// Borrow the logger.
    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Recover the logger.
    pub fn into_logger(self) -> L {
        self.logger
    }

    /// Register both axes and power their drivers.
    ///
    /// `outputs` are the carriage and head outputs, in that order.
    pub fn init<O: StepOutput>(&mut self, outputs: [O; 2]) -> Result<MultiAxisController<O, 2>> {
        self.check_phase(SequencePhase::Init)?;

        let mut controller = MultiAxisController::new();
        for (index, output) in outputs.into_iter().enumerate() {
            let kinematics = self.kinematics[index];
            self.logger.info(format_args!(
                "{}: {} steps to work position, max {:.2} steps/s ({} ns/step)",
                self.names[index],
                kinematics.total_steps.value(),
                kinematics.max_step_rate.0,
                kinematics.min_step_interval_ns,
            ));
            let axis = match Axis::new(output, kinematics.max_step_rate) {
                Ok(axis) => axis.named(&self.names[index]),
                Err(e) => return Err(self.fail(e)),
            };
            controller.add_axis(axis).map_err(|e| self.fail(e))?;
        }

        controller.enable_all().map_err(|e| self.fail(e))?;
        self.advance();
        Ok(controller)
    }

    /// Run the cycle once on an initialized controller.
    ///
    /// Blocks for the whole cycle. Any I/O failure is logged, ends the
    /// sequence and is returned.
    pub fn run<O, P, D, C>(
        &mut self,
        controller: &mut MultiAxisController<O, 2>,
        solenoid: &mut Solenoid<P>,
        delay: &mut D,
        clock: &mut C,
    ) -> Result<SequenceReport>
    where
        O: StepOutput,
        P: OutputPin,
        D: DelayNs,
        C: Clock,
    {
        self.check_phase(SequencePhase::MoveToWorkPosition)?;
        self.run_phases(controller, solenoid, delay, clock)
            .map_err(|e| self.fail(e))
    }

    /// [`Sequencer::init`] followed by [`Sequencer::run`].
    pub fn execute<O, P, D, C>(
        &mut self,
        outputs: [O; 2],
        solenoid: &mut Solenoid<P>,
        delay: &mut D,
        clock: &mut C,
    ) -> Result<SequenceReport>
    where
        O: StepOutput,
        P: OutputPin,
        D: DelayNs,
        C: Clock,
    {
        let mut controller = self.init(outputs)?;
        self.run(&mut controller, solenoid, delay, clock)
    }

    fn run_phases<O, P, D, C>(
        &mut self,
        controller: &mut MultiAxisController<O, 2>,
        solenoid: &mut Solenoid<P>,
        delay: &mut D,
        clock: &mut C,
    ) -> Result<SequenceReport>
    where
        O: StepOutput,
        P: OutputPin,
        D: DelayNs,
        C: Clock,
    {
        let work_position = [
            self.kinematics[CARRIAGE].total_steps,
            self.kinematics[HEAD].total_steps,
        ];

        let work_move = self.coordinated_move(controller, work_position, clock)?;
        self.logger.info(format_args!(
            "work position reached after {} ticks",
            work_move.ticks
        ));

        self.advance();
        solenoid.energize()?;
        self.advance();
        delay.delay_ms(self.dwell_ms);

        self.advance();
        solenoid.de_energize()?;
        self.advance();
        delay.delay_ms(self.dwell_ms);

        // Only the head goes home; the carriage holds the work position.
        self.advance();
        let return_move =
            self.coordinated_move(controller, [work_position[CARRIAGE], Steps(0)], clock)?;

        self.advance();
        delay.delay_ms(self.settle_ms);

        self.advance();
        let final_positions = controller.positions();
        self.logger
            .info(format_args!("Bottle cap placing cycle completed successfully"));
        self.logger.info(format_args!(
            "{} at {} steps, {} at {} steps",
            self.names[CARRIAGE],
            final_positions[CARRIAGE].value(),
            self.names[HEAD],
            final_positions[HEAD].value(),
        ));

        Ok(SequenceReport {
            work_move,
            return_move,
            dwell_ms: self.dwell_ms,
            final_positions,
        })
    }

    fn coordinated_move<O: StepOutput, C: Clock>(
        &mut self,
        controller: &mut MultiAxisController<O, 2>,
        targets: [Steps; 2],
        clock: &mut C,
    ) -> Result<MoveStats<2>> {
        controller.move_to(&MoveCommand::from_steps(targets))?;

        if let Some(pacing) = controller.pacing_axis() {
            self.logger.debug(format_args!(
                "move to [{}, {}]: {} ns, paced by {}",
                targets[CARRIAGE].value(),
                targets[HEAD].value(),
                controller.move_duration_ns(),
                self.names[pacing],
            ));
        } else {
            self.logger.debug(format_args!("move skipped, axes already in place"));
        }

        controller.run_to_position(clock)
    }

    fn advance(&mut self) {
        self.phase = self.phase.next();
        self.logger.debug(format_args!("phase: {}", self.phase));
    }

    fn check_phase(&self, expected: SequencePhase) -> Result<()> {
        if self.aborted {
            return Err(SequenceError::Aborted.into());
        }
        if self.phase == expected {
            return Ok(());
        }
        let err = match self.phase {
            SequencePhase::Init => SequenceError::NotInitialized,
            _ => SequenceError::AlreadyComplete,
        };
        Err(err.into())
    }

    fn fail(&mut self, error: Error) -> Error {
        self.aborted = true;
        self.logger
            .error(format_args!("{} failed: {}", self.phase, error));
        error
    }
}
