//! Bias Policies
//!
//! A bias policy computes the distortion an agent adds to a raw stimulus
//! before the stimulus reaches its belief update. Agents clamp the distorted
//! value, so policies only decide the size and direction of the distortion.

use serde::{Deserialize, Serialize};
use std::fmt;

use belief_events::NEUTRAL_BASELINE;

/// Distortion applied to a raw stimulus given the current belief.
pub trait BiasPolicy: fmt::Debug + Send + Sync {
    /// Name recorded in run reports
    fn name(&self) -> &'static str;

    /// Term added to `raw_stimulus` before clamping.
    fn distortion(&self, raw_stimulus: f64, belief: f64) -> f64;
}

/// Scales the stimulus's deviation from neutral by the belief strength.
///
/// Any deviation is amplified, including one pointing away from the belief's
/// own polarity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProportionalBias;

impl BiasPolicy for ProportionalBias {
    fn name(&self) -> &'static str {
        "proportional"
    }

    fn distortion(&self, raw_stimulus: f64, belief: f64) -> f64 {
        (raw_stimulus - NEUTRAL_BASELINE) * belief
    }
}

/// Amplifies deviations that agree with the belief's side of neutral and
/// attenuates those that disagree.
///
/// Strength is the belief's distance from neutral, rescaled to [0, 1]; a
/// neutral belief distorts nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PolarityAwareBias;

impl BiasPolicy for PolarityAwareBias {
    fn name(&self) -> &'static str {
        "polarity_aware"
    }

    fn distortion(&self, raw_stimulus: f64, belief: f64) -> f64 {
        let deviation = raw_stimulus - NEUTRAL_BASELINE;
        let polarity = belief - NEUTRAL_BASELINE;
        let conviction = (2.0 * polarity).abs();

        if deviation == 0.0 || polarity == 0.0 {
            0.0
        } else if deviation.signum() == polarity.signum() {
            deviation * conviction
        } else {
            -deviation * conviction
        }
    }
}

/// Selectable bias policy, as named in scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BiasKind {
    #[default]
    Proportional,
    PolarityAware,
}

impl BiasKind {
    pub fn policy(&self) -> Box<dyn BiasPolicy> {
        match self {
            BiasKind::Proportional => Box::new(ProportionalBias),
            BiasKind::PolarityAware => Box::new(PolarityAwareBias),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BiasKind::Proportional => "proportional",
            BiasKind::PolarityAware => "polarity_aware",
        }
    }
}

impl fmt::Display for BiasKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
