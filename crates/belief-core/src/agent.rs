//! Belief Agent
//!
//! An agent holds a single belief in [0.0, 1.0] and a fixed plasticity. Each
//! step it perceives a raw stimulus through its bias policy and moves its
//! belief toward what it perceived.

use belief_events::{Trajectory, NEUTRAL_BASELINE};

use crate::bias::{BiasPolicy, ProportionalBias};
use crate::error::{check_unit_interval, SimError};

/// Plasticity used when a scenario leaves it unspecified
pub const DEFAULT_PLASTICITY: f64 = 0.5;

/// A single believer.
///
/// `belief` and every entry of `history` stay within [0.0, 1.0]. `history`
/// always holds the initial belief followed by one entry per update.
#[derive(Debug)]
pub struct Agent {
    belief: f64,
    /// Resistance to change; 1.0 never moves, 0.0 adopts each percept fully
    plasticity: f64,
    history: Vec<f64>,
    bias: Box<dyn BiasPolicy>,
}

impl Agent {
    /// Creates an agent with the proportional bias policy.
    ///
    /// Out-of-range or non-finite values are rejected with
    /// [`SimError::ValueRange`] rather than clamped.
    pub fn new(initial_belief: f64, plasticity: f64) -> Result<Self, SimError> {
        let belief = check_unit_interval("initial_belief", initial_belief)?;
        let plasticity = check_unit_interval("plasticity", plasticity)?;

        Ok(Self {
            belief,
            plasticity,
            history: vec![belief],
            bias: Box::new(ProportionalBias),
        })
    }

    /// Swaps the bias policy. Perception and update mechanics are unchanged.
    pub fn with_bias(mut self, bias: Box<dyn BiasPolicy>) -> Self {
        self.bias = bias;
        self
    }

    pub fn belief(&self) -> f64 {
        self.belief
    }

    pub fn plasticity(&self) -> f64 {
        self.plasticity
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn initial_belief(&self) -> f64 {
        self.history[0]
    }

    /// Number of updates applied so far.
    pub fn steps_taken(&self) -> usize {
        self.history.len() - 1
    }

    pub fn bias(&self) -> &dyn BiasPolicy {
        self.bias.as_ref()
    }

    /// Filters a raw stimulus through the current belief.
    ///
    /// Pure: reads the belief, never changes it. The result is clamped to
    /// [0.0, 1.0] whatever the policy returns; a non-finite result is
    /// perceived as the neutral baseline.
    pub fn perceive(&self, raw_stimulus: f64) -> f64 {
        let distortion = self.bias.distortion(raw_stimulus, self.belief);
        let perceived = raw_stimulus + distortion;
        if perceived.is_nan() {
            return NEUTRAL_BASELINE;
        }
        perceived.clamp(0.0, 1.0)
    }

    /// Moves the belief toward `perceived_input` and records it.
    ///
    /// Appends exactly one history entry, even when the belief does not move.
    /// A non-finite input leaves the belief where it is.
    pub fn update(&mut self, perceived_input: f64) {
        if !perceived_input.is_finite() {
            self.history.push(self.belief);
            return;
        }
        let delta = perceived_input - self.belief;
        let new_belief = self.belief + delta * (1.0 - self.plasticity);

        self.belief = new_belief.clamp(0.0, 1.0);
        self.history.push(self.belief);
    }

    /// Converts the finished agent into a plottable series.
    pub fn into_trajectory(self, label: impl Into<String>) -> Trajectory {
        Trajectory::new(label, self.history[0], self.plasticity, self.history)
    }
}
