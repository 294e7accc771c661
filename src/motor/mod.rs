//! Motor module for capper-motion.
//!
//! Provides step outputs, single axes with position tracking, and the
//! coordinated multi-axis controller.

mod axis;
mod controller;
mod output;

pub use axis::Axis;
pub use controller::{MoveCommand, MoveStats, MultiAxisController};
pub use output::{StepDirOutput, StepOutput, DEFAULT_PULSE_WIDTH_NS};
