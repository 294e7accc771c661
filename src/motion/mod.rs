//! Motion module for capper-motion.
//!
//! Provides coordinated move planning and per-axis step scheduling.

mod profile;
mod schedule;

pub use profile::{CoordinatedProfile, Direction};
pub use schedule::StepSchedule;
