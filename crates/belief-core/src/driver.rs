//! Simulation Driver
//!
//! Feeds a stimulus stream through an agent's perceive→update cycle. Each
//! update completes before the next perception, so every percept is filtered
//! by the belief the previous step produced.

use belief_events::{default_label, RunReport, StimulusMode};
use tracing::{debug, trace, warn};

use crate::agent::Agent;
use crate::bias::BiasKind;
use crate::error::{check_unit_interval, SimError};
use crate::stimulus::StimulusSource;

/// Largest step count accepted from a scenario or the command line
pub const MAX_STEPS: i64 = 100_000_000;

/// Converts a signed step count into a usable one.
///
/// Rejects negative counts and counts above [`MAX_STEPS`].
pub fn step_count(steps: i64) -> Result<usize, SimError> {
    if steps > MAX_STEPS {
        return Err(SimError::InvalidStepCount(steps));
    }
    usize::try_from(steps).map_err(|_| SimError::InvalidStepCount(steps))
}

/// One perceive→update cycle. Returns the percept.
pub fn step(agent: &mut Agent, raw_stimulus: f64) -> f64 {
    let percept = agent.perceive(raw_stimulus);
    agent.update(percept);
    percept
}

/// Drives `agent` over an explicit stimulus sequence.
///
/// Every stimulus is checked before the first step; on error the agent is
/// left untouched.
pub fn run_with_stimuli(agent: &mut Agent, stimuli: &[f64]) -> Result<(), SimError> {
    for (i, &stimulus) in stimuli.iter().enumerate() {
        check_unit_interval(&format!("stimulus[{}]", i), stimulus)?;
    }

    for (i, &stimulus) in stimuli.iter().enumerate() {
        let percept = step(agent, stimulus);
        trace!(
            step = i,
            stimulus,
            percept,
            belief = agent.belief(),
            "belief updated"
        );
    }
    Ok(())
}

/// Draws `steps` stimuli from `source` and drives `agent` over them.
///
/// Returns the raw stimuli used, for plotting against the neutral baseline.
/// On error the agent is left untouched.
pub fn run<S>(agent: &mut Agent, steps: usize, source: &mut S) -> Result<Vec<f64>, SimError>
where
    S: StimulusSource + ?Sized,
{
    let stimuli = source.take_stimuli(steps)?;

    debug!(
        initial_belief = agent.belief(),
        plasticity = agent.plasticity(),
        steps,
        "running agent"
    );
    run_with_stimuli(agent, &stimuli)?;
    debug!(final_belief = agent.belief(), "agent finished");

    Ok(stimuli)
}

/// An agent entered into a comparison.
#[derive(Debug)]
pub struct ComparisonEntry {
    pub label: String,
    pub agent: Agent,
}

/// An agent whose run was aborted; the rest of the comparison still ran.
#[derive(Debug)]
pub struct AgentFailure {
    pub label: String,
    pub error: SimError,
}

/// Several independent agents run for the same number of steps.
///
/// In [`StimulusMode::Shared`] one stream is drawn and every agent sees it;
/// in [`StimulusMode::Independent`] each agent draws its own stream, in entry
/// order, from the same source. Every agent perceives through the
/// comparison's bias policy.
#[derive(Debug)]
pub struct Comparison {
    mode: StimulusMode,
    bias: BiasKind,
    entries: Vec<ComparisonEntry>,
}

/// Result of a comparison run.
#[derive(Debug)]
pub struct ComparisonOutcome {
    pub mode: StimulusMode,
    pub bias: BiasKind,
    pub steps: usize,
    /// Agents that completed, in entry order
    pub entries: Vec<ComparisonEntry>,
    /// One stream in shared mode, one per completed agent otherwise
    pub stimuli: Vec<Vec<f64>>,
    pub failures: Vec<AgentFailure>,
}

impl Comparison {
    pub fn new(mode: StimulusMode, bias: BiasKind) -> Self {
        Self {
            mode,
            bias,
            entries: Vec::new(),
        }
    }

    pub fn mode(&self) -> StimulusMode {
        self.mode
    }

    pub fn bias(&self) -> BiasKind {
        self.bias
    }

    /// Adds an agent under the comparison's bias policy; `None` assigns the
    /// default legend label.
    pub fn add(&mut self, label: Option<String>, agent: Agent) {
        let label = label.unwrap_or_else(|| {
            default_label(self.entries.len(), agent.initial_belief(), agent.plasticity())
        });
        let agent = agent.with_bias(self.bias.policy());
        self.entries.push(ComparisonEntry { label, agent });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs every agent for `steps` steps.
    ///
    /// A failure to draw the shared stream aborts the whole comparison; in
    /// independent mode a failure only drops the affected agent.
    pub fn run<S>(self, steps: usize, source: &mut S) -> Result<ComparisonOutcome, SimError>
    where
        S: StimulusSource + ?Sized,
    {
        let mut outcome = ComparisonOutcome {
            mode: self.mode,
            bias: self.bias,
            steps,
            entries: Vec::with_capacity(self.entries.len()),
            stimuli: Vec::new(),
            failures: Vec::new(),
        };

        match self.mode {
            StimulusMode::Shared => {
                let stimuli = source.take_stimuli(steps)?;
                for mut entry in self.entries {
                    debug!(label = %entry.label, steps, "running agent on shared stimuli");
                    run_with_stimuli(&mut entry.agent, &stimuli)?;
                    outcome.entries.push(entry);
                }
                outcome.stimuli.push(stimuli);
            }
            StimulusMode::Independent => {
                for mut entry in self.entries {
                    match run(&mut entry.agent, steps, source) {
                        Ok(stimuli) => {
                            outcome.stimuli.push(stimuli);
                            outcome.entries.push(entry);
                        }
                        Err(error) => {
                            warn!(label = %entry.label, %error, "agent run aborted");
                            outcome.failures.push(AgentFailure {
                                label: entry.label,
                                error,
                            });
                        }
                    }
                }
            }
        }

        Ok(outcome)
    }
}

impl ComparisonOutcome {
    /// Packs the completed agents into a report.
    pub fn into_report(self, report_id: impl Into<String>, seed: u64) -> RunReport {
        let mut report = RunReport::new(
            report_id,
            seed,
            self.steps,
            self.mode,
            self.bias.as_str(),
        );
        report.stimuli = self.stimuli;
        report.trajectories = self
            .entries
            .into_iter()
            .map(|e| e.agent.into_trajectory(e.label))
            .collect();
        report
    }
}
