//! Capping cycle example.
//!
//! Runs one complete capping cycle on simulated pins: both axes travel to the
//! work position, the solenoid seats the cap, and the head returns home.
//!
//! Run with: `cargo run --example capping_cycle [-- path/to/capper.toml]`

use capper_motion::{
    load_config, FmtLogger, Result, SequenceConfig, Sequencer, Solenoid, StepDirOutput, TickClock,
};

/// Mock delay for demonstration.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        // In real code, this would actually delay
    }
}

/// Mock output pin counting rising edges.
#[derive(Default)]
struct MockPin {
    state: bool,
    pulses: u64,
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        if !self.state {
            self.pulses += 1;
        }
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

fn main() {
    println!("=== Capping Cycle Example ===\n");

    if let Err(e) = run() {
        eprintln!("Cycle failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            println!("Loading configuration from {}", path);
            load_config(path)?
        }
        None => {
            println!("Using built-in station configuration");
            SequenceConfig::default()
        }
    };

    let logger = FmtLogger::new(String::new(), config.logging.verbosity);
    let mut sequencer = Sequencer::new(&config, logger)?;

    let outputs = [&config.carriage, &config.head].map(|axis| {
        StepDirOutput::new(MockPin::default(), MockPin::default(), MockPin::default(), MockDelay)
            .configured(axis)
    });

    let mut controller = sequencer.init(outputs)?;
    let mut solenoid = Solenoid::new(MockPin::default());
    let mut clock = TickClock::new(config.timing.tick_ns);

    let report = sequencer.run(&mut controller, &mut solenoid, &mut MockDelay, &mut clock)?;

    println!("--- Diagnostics ---");
    print!("{}", sequencer.logger().sink());

    println!("\n--- Summary ---");
    println!(
        "Work move: {:.3} s simulated, {} carriage / {} head steps",
        report.work_move.duration_ns as f64 / 1e9,
        report.work_move.pulses[0],
        report.work_move.pulses[1],
    );
    println!(
        "Return move: {:.3} s simulated, {} head steps",
        report.return_move.duration_ns as f64 / 1e9,
        report.return_move.pulses[1],
    );
    println!("Solenoid dwell: {} ms (x2)", report.dwell_ms);
    println!(
        "Final positions: carriage {} steps, head {} steps",
        report.final_positions[0].value(),
        report.final_positions[1].value(),
    );

    for axis in controller.into_axes() {
        let name = axis.name().to_owned();
        let (step, _, _, _) = axis.into_output().release();
        println!("{} STEP pin pulsed {} times", name, step.pulses);
    }
    println!("Solenoid pulsed {} time(s)", solenoid.release().pulses);

    Ok(())
}
