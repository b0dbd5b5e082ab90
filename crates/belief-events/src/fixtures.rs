//! Sample data fixtures for testing.
//!
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // belief-events = { path = "../belief-events", features = ["test-fixtures"] }
//!
//! use belief_events::fixtures;
//!
//! let report = fixtures::sample_report();
//! ```

use crate::RunReport;

/// Stimulus stream behind the sample report.
pub const SAMPLE_STIMULI: [f64; 5] = [0.9, 0.25, 0.5, 0.75, 0.1];

/// Returns the sample report from the fixtures file.
///
/// Contains the two-agent comparison over five shared stimuli:
/// - Agent 1: initial belief 0.8, plasticity 0.2
/// - Agent 2: initial belief 0.5, plasticity 0.5
pub fn sample_report() -> RunReport {
    let json = include_str!("../tests/fixtures/sample_report.json");
    RunReport::from_json(json).expect("Failed to parse sample_report.json")
}
