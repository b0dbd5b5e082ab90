//! Visualization layer: Bevy-based belief chart.

pub mod chart;
pub mod plugin;
pub mod report_loader;

pub use plugin::BeliefVizPlugin;
