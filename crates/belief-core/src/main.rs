//! Belief Feedback Simulation
//!
//! Runs a set of agents whose beliefs filter the noise they are exposed to,
//! then writes the belief trajectories for the visualizer.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use belief_core::config::DEFAULT_SCENARIO_PATH;
use belief_core::output::{format_summary, write_report};
use belief_core::{default_config_toml, BiasKind, ScenarioConfig, SimError, UniformStimulus};
use belief_events::{generate_report_id, StimulusMode};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "belief_sim")]
#[command(about = "A confirmation-bias belief feedback simulation")]
struct Args {
    /// Scenario file (built-in scenario if missing)
    #[arg(long, default_value = DEFAULT_SCENARIO_PATH)]
    config: PathBuf,

    /// Number of steps to simulate
    #[arg(long, allow_negative_numbers = true)]
    steps: Option<i64>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Whether agents share one stimulus stream
    #[arg(long, value_enum)]
    stimulus_mode: Option<CliStimulusMode>,

    /// Bias policy applied to every agent
    #[arg(long, value_enum)]
    bias: Option<CliBias>,

    /// Directory for report.json
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Skip writing the report
    #[arg(long)]
    no_write: bool,

    /// Print a default scenario file and exit
    #[arg(long)]
    print_default_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliStimulusMode {
    Shared,
    Independent,
}

impl From<CliStimulusMode> for StimulusMode {
    fn from(mode: CliStimulusMode) -> Self {
        match mode {
            CliStimulusMode::Shared => StimulusMode::Shared,
            CliStimulusMode::Independent => StimulusMode::Independent,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliBias {
    Proportional,
    PolarityAware,
}

impl From<CliBias> for BiasKind {
    fn from(bias: CliBias) -> Self {
        match bias {
            CliBias::Proportional => BiasKind::Proportional,
            CliBias::PolarityAware => BiasKind::PolarityAware,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.print_default_config {
        print!("{}", default_config_toml());
        return ExitCode::SUCCESS;
    }

    match run_simulation(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_simulation(args: Args) -> Result<(), SimError> {
    let mut config = ScenarioConfig::load_or_default(&args.config)?;
    apply_overrides(&mut config, &args);

    let steps = config.validate()?;
    let seed = config.simulation.seed;

    println!("Belief Feedback Simulation");
    println!("==========================");
    println!("Seed: {}", seed);
    println!("Steps: {}", steps);
    println!("Stimulus mode: {}", config.simulation.stimulus_mode);
    println!("Bias policy: {}", config.simulation.bias);
    println!("Agents: {}", config.agents.len());
    println!();

    let comparison = config.build_comparison()?;
    let mut source = UniformStimulus::from_seed(seed);
    let outcome = comparison.run(steps, &mut source)?;

    for failure in &outcome.failures {
        eprintln!("Warning: {} aborted: {}", failure.label, failure.error);
    }

    let report = outcome.into_report(generate_report_id(), seed);
    println!("{}", format_summary(&report));
    println!();

    if args.no_write {
        tracing::info!("Report not written (--no-write)");
    } else {
        let path = write_report(&report, &config.simulation.output_dir)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Command line values take precedence over the scenario file.
fn apply_overrides(config: &mut ScenarioConfig, args: &Args) {
    if let Some(steps) = args.steps {
        config.simulation.steps = steps;
    }
    if let Some(seed) = args.seed {
        config.simulation.seed = seed;
    }
    if let Some(mode) = args.stimulus_mode {
        config.simulation.stimulus_mode = mode.into();
    }
    if let Some(bias) = args.bias {
        config.simulation.bias = bias.into();
    }
    if let Some(ref dir) = args.output_dir {
        config.simulation.output_dir = dir.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["belief_sim"]);

        assert_eq!(args.config, PathBuf::from(DEFAULT_SCENARIO_PATH));
        assert!(args.steps.is_none());
        assert!(!args.no_write);
    }

    #[test]
    fn test_overrides_apply() {
        let args = Args::parse_from([
            "belief_sim",
            "--steps",
            "250",
            "--seed",
            "7",
            "--stimulus-mode",
            "independent",
            "--bias",
            "polarity-aware",
            "--output-dir",
            "out",
        ]);
        let mut config = ScenarioConfig::default();
        apply_overrides(&mut config, &args);

        assert_eq!(config.simulation.steps, 250);
        assert_eq!(config.simulation.seed, 7);
        assert_eq!(config.simulation.stimulus_mode, StimulusMode::Independent);
        assert_eq!(config.simulation.bias, BiasKind::PolarityAware);
        assert_eq!(config.simulation.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_negative_steps_reach_validation() {
        let args = Args::parse_from(["belief_sim", "--steps", "-3"]);
        let mut config = ScenarioConfig::default();
        apply_overrides(&mut config, &args);

        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidStepCount(-3))
        ));
    }

    #[test]
    fn test_huge_steps_reach_validation() {
        let args = Args::parse_from(["belief_sim", "--steps", "9223372036854775807"]);
        let mut config = ScenarioConfig::default();
        apply_overrides(&mut config, &args);

        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidStepCount(i64::MAX))
        ));
    }
}
