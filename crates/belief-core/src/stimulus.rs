//! Stimulus Sources
//!
//! Generators for the raw, unbiased stimuli an agent is exposed to. The driver
//! takes a source explicitly so runs can be seeded or replayed from a fixed
//! sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::{check_unit_interval, SimError};

/// A stream of raw stimuli in [0.0, 1.0].
pub trait StimulusSource {
    /// Next stimulus, or `None` once a finite source is exhausted.
    fn next_stimulus(&mut self) -> Option<f64>;

    /// Draws exactly `steps` stimuli.
    ///
    /// A count too large to allocate is an [`SimError::InvalidStepCount`].
    fn take_stimuli(&mut self, steps: usize) -> Result<Vec<f64>, SimError> {
        let mut stimuli: Vec<f64> = Vec::new();
        stimuli
            .try_reserve_exact(steps)
            .map_err(|_| SimError::InvalidStepCount(i64::try_from(steps).unwrap_or(i64::MAX)))?;
        for _ in 0..steps {
            match self.next_stimulus() {
                Some(stimulus) => stimuli.push(stimulus),
                None => {
                    return Err(SimError::StimulusExhausted {
                        requested: steps,
                        available: stimuli.len(),
                    })
                }
            }
        }
        Ok(stimuli)
    }
}

/// Uniform stimuli over [0.0, 1.0) from a seeded `SmallRng`.
#[derive(Debug, Clone)]
pub struct UniformStimulus {
    rng: SmallRng,
}

impl UniformStimulus {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_rng(rng: SmallRng) -> Self {
        Self { rng }
    }
}

impl StimulusSource for UniformStimulus {
    fn next_stimulus(&mut self) -> Option<f64> {
        Some(self.rng.gen::<f64>())
    }
}

/// Replays a fixed sequence of stimuli.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedStimulus {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedStimulus {
    /// Rejects any value outside [0.0, 1.0].
    pub fn new(values: Vec<f64>) -> Result<Self, SimError> {
        for (i, &value) in values.iter().enumerate() {
            check_unit_interval(&format!("stimulus[{}]", i), value)?;
        }
        Ok(Self { values, cursor: 0 })
    }

    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }

    /// Rewinds to the first value.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl StimulusSource for FixedStimulus {
    fn next_stimulus(&mut self) -> Option<f64> {
        let value = self.values.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(value)
    }
}
