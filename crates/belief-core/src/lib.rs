//! Belief Feedback Simulation Library
//!
//! A single scalar belief evolves under noisy stimuli while the belief itself
//! biases how each stimulus is perceived.
//!
//! # Modules
//!
//! - [`agent`]: belief state with perceive and update operations
//! - [`bias`]: swappable confirmation-bias policies
//! - [`stimulus`]: seeded and fixed stimulus sources
//! - [`driver`]: perceive→update loop and multi-agent comparisons
//! - [`config`]: TOML scenario files
//! - [`output`]: report writing and console summary

pub mod agent;
pub mod bias;
pub mod config;
pub mod driver;
pub mod error;
pub mod output;
pub mod stimulus;

pub use agent::{Agent, DEFAULT_PLASTICITY};
pub use bias::{BiasKind, BiasPolicy, PolarityAwareBias, ProportionalBias};
pub use config::{default_config_toml, AgentSpec, ConfigError, ScenarioConfig, SimulationConfig};
pub use driver::{
    run, run_with_stimuli, step, step_count, AgentFailure, Comparison, ComparisonEntry,
    ComparisonOutcome, MAX_STEPS,
};
pub use error::SimError;
pub use stimulus::{FixedStimulus, StimulusSource, UniformStimulus};
