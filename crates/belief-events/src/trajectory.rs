//! Trajectory Types
//!
//! A trajectory is the belief history of one agent: the seed belief followed by
//! one value per completed step. This is the series the presentation layer
//! plots against the neutral baseline.

use serde::{Deserialize, Serialize};

/// Belief history of a single agent, plus the parameters it was run with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub label: String,
    pub initial_belief: f64,
    pub plasticity: f64,
    /// Belief at time index 0..=steps
    pub beliefs: Vec<f64>,
}

/// Aggregate figures for a trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySummary {
    pub steps: usize,
    pub final_belief: f64,
    pub min_belief: f64,
    pub max_belief: f64,
    pub mean_belief: f64,
    /// Mean of |belief[t+1] - belief[t]|, 0.0 when no step was taken
    pub mean_abs_change: f64,
}

impl Trajectory {
    /// Creates a trajectory from a finished belief history.
    pub fn new(
        label: impl Into<String>,
        initial_belief: f64,
        plasticity: f64,
        beliefs: Vec<f64>,
    ) -> Self {
        Self {
            label: label.into(),
            initial_belief,
            plasticity,
            beliefs,
        }
    }

    /// Number of completed steps (history length minus the seed).
    pub fn steps(&self) -> usize {
        self.beliefs.len().saturating_sub(1)
    }

    /// Last belief held, or the initial belief for an empty series.
    pub fn final_belief(&self) -> f64 {
        self.beliefs.last().copied().unwrap_or(self.initial_belief)
    }

    /// Whether every value lies in [0.0, 1.0].
    pub fn is_bounded(&self) -> bool {
        self.beliefs.iter().all(|b| (0.0..=1.0).contains(b))
    }

    pub fn summary(&self) -> TrajectorySummary {
        if self.beliefs.is_empty() {
            return TrajectorySummary {
                steps: 0,
                final_belief: self.initial_belief,
                min_belief: self.initial_belief,
                max_belief: self.initial_belief,
                mean_belief: self.initial_belief,
                mean_abs_change: 0.0,
            };
        }

        let min_belief = self.beliefs.iter().copied().fold(f64::INFINITY, f64::min);
        let max_belief = self
            .beliefs
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let mean_belief = self.beliefs.iter().sum::<f64>() / self.beliefs.len() as f64;

        let steps = self.steps();
        let mean_abs_change = if steps > 0 {
            self.beliefs
                .windows(2)
                .map(|w| (w[1] - w[0]).abs())
                .sum::<f64>()
                / steps as f64
        } else {
            0.0
        };

        TrajectorySummary {
            steps,
            final_belief: self.final_belief(),
            min_belief,
            max_belief,
            mean_belief,
            mean_abs_change,
        }
    }
}

/// Builds the default legend label for the agent at `index` (zero-based).
pub fn default_label(index: usize, initial_belief: f64, plasticity: f64) -> String {
    format!(
        "Agent {} (initial belief: {:.1}, plasticity: {:.1})",
        index + 1,
        initial_belief,
        plasticity
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_label() {
        assert_eq!(
            default_label(0, 0.8, 0.2),
            "Agent 1 (initial belief: 0.8, plasticity: 0.2)"
        );
        assert_eq!(
            default_label(1, 0.5, 0.5),
            "Agent 2 (initial belief: 0.5, plasticity: 0.5)"
        );
    }

    #[test]
    fn test_summary() {
        let trajectory = Trajectory::new("t", 0.5, 0.5, vec![0.5, 0.75, 0.25, 0.5]);
        let summary = trajectory.summary();

        assert_eq!(summary.steps, 3);
        assert!(approx(summary.final_belief, 0.5));
        assert!(approx(summary.min_belief, 0.25));
        assert!(approx(summary.max_belief, 0.75));
        assert!(approx(summary.mean_belief, 0.5));
        // |0.25| + |-0.5| + |0.25| over 3 steps
        assert!(approx(summary.mean_abs_change, 1.0 / 3.0));
    }

    #[test]
    fn test_summary_seed_only() {
        let trajectory = Trajectory::new("t", 0.3, 0.1, vec![0.3]);
        let summary = trajectory.summary();

        assert_eq!(summary.steps, 0);
        assert_eq!(summary.mean_abs_change, 0.0);
        assert!(approx(summary.final_belief, 0.3));
    }

    #[test]
    fn test_summary_empty_series_falls_back_to_initial() {
        let trajectory = Trajectory::new("t", 0.6, 0.1, Vec::new());
        let summary = trajectory.summary();

        assert_eq!(summary.steps, 0);
        assert!(approx(summary.min_belief, 0.6));
        assert!(approx(summary.final_belief, 0.6));
    }

    #[test]
    fn test_is_bounded() {
        assert!(Trajectory::new("t", 0.0, 0.0, vec![0.0, 1.0, 0.5]).is_bounded());
        assert!(!Trajectory::new("t", 0.0, 0.0, vec![0.0, 1.01]).is_bounded());
    }
}
