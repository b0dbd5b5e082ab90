//! Scenario Configuration
//!
//! Loads run parameters from a TOML scenario file so experiments can be
//! adjusted without recompiling.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use belief_events::StimulusMode;

use crate::agent::{Agent, DEFAULT_PLASTICITY};
use crate::bias::BiasKind;
use crate::driver::{step_count, Comparison};
use crate::error::{check_unit_interval, SimError};

/// Default scenario file path
pub const DEFAULT_SCENARIO_PATH: &str = "scenario.toml";

/// Complete scenario: run settings plus the agents to compare.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default = "default_agents")]
    pub agents: Vec<AgentSpec>,
}

/// Run-wide settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Signed so that a negative count surfaces as a validation error
    pub steps: i64,
    pub seed: u64,
    pub stimulus_mode: StimulusMode,
    pub bias: BiasKind,
    pub output_dir: PathBuf,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            seed: 42,
            stimulus_mode: StimulusMode::Shared,
            bias: BiasKind::Proportional,
            output_dir: PathBuf::from("output"),
        }
    }
}

/// One agent entry (`[[agents]]` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub initial_belief: f64,
    #[serde(default = "default_plasticity")]
    pub plasticity: f64,
}

impl AgentSpec {
    pub fn new(initial_belief: f64, plasticity: f64) -> Self {
        Self {
            label: None,
            initial_belief,
            plasticity,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

fn default_plasticity() -> f64 {
    DEFAULT_PLASTICITY
}

/// Strong believer against a neutral one
fn default_agents() -> Vec<AgentSpec> {
    vec![
        AgentSpec::new(0.8, 0.2).with_label("Agent 1 (initial belief: 0.8, strong bias)"),
        AgentSpec::new(0.5, 0.5).with_label("Agent 2 (initial belief: 0.5, neutral bias)"),
    ]
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            agents: default_agents(),
        }
    }
}

impl ScenarioConfig {
    /// Loads a scenario from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parses a scenario from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads from `path`, or falls back to the built-in scenario if the file
    /// is missing. A file that exists but does not parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(
                "Scenario file {} not found, using built-in scenario",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Serializes the scenario back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks every value and returns the usable step count.
    pub fn validate(&self) -> Result<usize, SimError> {
        let steps = step_count(self.simulation.steps)?;

        if self.agents.is_empty() {
            return Err(ConfigError::Invalid("scenario defines no agents".to_string()).into());
        }

        for (i, spec) in self.agents.iter().enumerate() {
            check_unit_interval(&format!("agents[{}].initial_belief", i), spec.initial_belief)?;
            check_unit_interval(&format!("agents[{}].plasticity", i), spec.plasticity)?;
        }

        Ok(steps)
    }

    /// Builds the comparison described by this scenario.
    pub fn build_comparison(&self) -> Result<Comparison, SimError> {
        self.validate()?;

        let mut comparison = Comparison::new(self.simulation.stimulus_mode, self.simulation.bias);
        for spec in &self.agents {
            let agent = Agent::new(spec.initial_belief, spec.plasticity)?;
            comparison.add(spec.label.clone(), agent);
        }
        Ok(comparison)
    }
}

/// Errors that can occur while loading a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid scenario: {0}")]
    Invalid(String),
}

/// Generates a commented default scenario file.
pub fn default_config_toml() -> String {
    r#"# Belief simulation scenario

[simulation]
steps = 100
seed = 42
# "shared": every agent sees the same stimuli; "independent": one stream each
stimulus_mode = "shared"
# "proportional" or "polarity_aware"
bias = "proportional"
output_dir = "output"

[[agents]]
label = "Agent 1 (initial belief: 0.8, strong bias)"
initial_belief = 0.8
plasticity = 0.2

[[agents]]
label = "Agent 2 (initial belief: 0.5, neutral bias)"
initial_belief = 0.5
plasticity = 0.5
"#
    .to_string()
}
