//! Shared data types for belief simulation output.
//!
//! This crate contains pure data structures with no simulation logic.
//! Both the simulation and the visualizer depend on it.

pub mod report;
pub mod trajectory;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

pub use report::{generate_report_id, RunReport, StimulusMode, NEUTRAL_BASELINE};
pub use trajectory::{default_label, Trajectory, TrajectorySummary};
