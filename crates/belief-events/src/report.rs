//! Run Report Types
//!
//! Serialization structs for the output of one comparative run.
//!
//! A report is written once by the simulation and read by the visualizer; it
//! carries every trajectory, the stimulus stream(s) behind them, and the
//! neutral baseline drawn as a reference line.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::trajectory::{Trajectory, TrajectorySummary};

/// Belief value of a neutral stimulus; drawn as the reference line.
pub const NEUTRAL_BASELINE: f64 = 0.5;

/// Generates a fresh report ID.
pub fn generate_report_id() -> String {
    format!("run_{}", Uuid::new_v4().simple())
}

/// How stimulus streams are assigned to the agents of a comparative run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StimulusMode {
    /// One stream is drawn and every agent sees the same reality
    #[default]
    Shared,
    /// Each agent draws its own stream from the run's generator
    Independent,
}

impl StimulusMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StimulusMode::Shared => "shared",
            StimulusMode::Independent => "independent",
        }
    }
}

impl std::fmt::Display for StimulusMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete output of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub report_id: String,
    pub seed: u64,
    pub steps: usize,
    #[serde(default)]
    pub stimulus_mode: StimulusMode,
    pub bias_policy: String,
    #[serde(default = "default_baseline")]
    pub neutral_baseline: f64,
    /// One stream in shared mode, one per trajectory in independent mode
    #[serde(default)]
    pub stimuli: Vec<Vec<f64>>,
    pub trajectories: Vec<Trajectory>,
}

fn default_baseline() -> f64 {
    NEUTRAL_BASELINE
}

impl RunReport {
    /// Creates an empty report for a run.
    pub fn new(
        report_id: impl Into<String>,
        seed: u64,
        steps: usize,
        stimulus_mode: StimulusMode,
        bias_policy: impl Into<String>,
    ) -> Self {
        Self {
            report_id: report_id.into(),
            seed,
            steps,
            stimulus_mode,
            bias_policy: bias_policy.into(),
            neutral_baseline: NEUTRAL_BASELINE,
            stimuli: Vec::new(),
            trajectories: Vec::new(),
        }
    }

    /// Stimulus stream seen by the trajectory at `index`.
    pub fn stimuli_for(&self, index: usize) -> Option<&[f64]> {
        match self.stimulus_mode {
            StimulusMode::Shared => self.stimuli.first(),
            StimulusMode::Independent => self.stimuli.get(index),
        }
        .map(|s| s.as_slice())
    }

    /// Summaries paired with their labels, in trajectory order.
    pub fn summaries(&self) -> Vec<(&str, TrajectorySummary)> {
        self.trajectories
            .iter()
            .map(|t| (t.label.as_str(), t.summary()))
            .collect()
    }

    /// Largest series length, used to size the x axis.
    pub fn max_len(&self) -> usize {
        self.trajectories
            .iter()
            .map(|t| t.beliefs.len())
            .max()
            .unwrap_or(0)
    }

    /// Serializes the report to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a report from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_report_id() {
        let a = generate_report_id();
        let b = generate_report_id();

        assert!(a.starts_with("run_"));
        assert_eq!(a.len(), "run_".len() + 32);
        assert_ne!(a, b);
    }

    #[test]
    fn test_stimulus_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&StimulusMode::Shared).unwrap(),
            r#""shared""#
        );
        assert_eq!(
            serde_json::to_string(&StimulusMode::Independent).unwrap(),
            r#""independent""#
        );
        assert_eq!(StimulusMode::default(), StimulusMode::Shared);
    }

    #[test]
    fn test_stimuli_for_shared_mode() {
        let mut report = RunReport::new("run_a", 1, 2, StimulusMode::Shared, "proportional");
        report.stimuli.push(vec![0.1, 0.2]);

        assert_eq!(report.stimuli_for(0), Some(&[0.1, 0.2][..]));
        assert_eq!(report.stimuli_for(3), Some(&[0.1, 0.2][..]));
    }

    #[test]
    fn test_stimuli_for_independent_mode() {
        let mut report = RunReport::new("run_b", 1, 1, StimulusMode::Independent, "proportional");
        report.stimuli.push(vec![0.1]);
        report.stimuli.push(vec![0.9]);

        assert_eq!(report.stimuli_for(1), Some(&[0.9][..]));
        assert_eq!(report.stimuli_for(2), None);
    }

    #[test]
    fn test_missing_baseline_uses_default() {
        let json = r#"{
            "report_id": "run_x",
            "seed": 7,
            "steps": 0,
            "bias_policy": "proportional",
            "trajectories": []
        }"#;

        let report = RunReport::from_json(json).unwrap();
        assert_eq!(report.neutral_baseline, NEUTRAL_BASELINE);
        assert_eq!(report.stimulus_mode, StimulusMode::Shared);
        assert_eq!(report.max_len(), 0);
    }
}
