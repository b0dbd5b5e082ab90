//! Belief Trajectory Visualization
//!
//! Run with: cargo run -p viz
//!
//! Examples:
//!   cargo run -p viz -- --report output/report.json

use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;
use viz::report_loader::ReportPath;
use viz::BeliefVizPlugin;

/// Belief Trajectory Visualization
#[derive(Parser, Debug)]
#[command(name = "viz")]
#[command(about = "Line chart of belief trajectories from a simulation report")]
struct Args {
    /// Report written by belief_sim
    #[arg(long, default_value = "output/report.json")]
    report: PathBuf,
}

fn main() {
    let args = Args::parse();

    App::new()
        .insert_resource(ReportPath(args.report))
        .add_plugins(BeliefVizPlugin)
        .run();
}
