//! Report Output
//!
//! Writes run reports for the visualizer and formats the console summary.

use std::fs;
use std::path::{Path, PathBuf};

use belief_events::RunReport;

/// File name of the report inside the output directory
pub const REPORT_FILE_NAME: &str = "report.json";

/// Writes `report` as pretty JSON to `<output_dir>/report.json`.
///
/// Creates the directory if needed and returns the written path.
pub fn write_report(report: &RunReport, output_dir: impl AsRef<Path>) -> std::io::Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
    }

    let json = report
        .to_json_pretty()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let path = output_dir.join(REPORT_FILE_NAME);
    fs::write(&path, json)?;
    Ok(path)
}

/// Reads a report previously written by [`write_report`].
pub fn read_report(path: impl AsRef<Path>) -> std::io::Result<RunReport> {
    let content = fs::read_to_string(path)?;
    RunReport::from_json(&content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// Formats one line per trajectory with its summary figures.
pub fn format_summary(report: &RunReport) -> String {
    let mut lines = Vec::with_capacity(report.trajectories.len() + 2);
    lines.push(format!(
        "{:<50} {:>7} {:>7} {:>7} {:>7} {:>9}",
        "Series", "final", "min", "max", "mean", "avg |Δ|"
    ));
    lines.push("-".repeat(92));

    for (label, summary) in report.summaries() {
        lines.push(format!(
            "{:<50} {:>7.3} {:>7.3} {:>7.3} {:>7.3} {:>9.4}",
            label,
            summary.final_belief,
            summary.min_belief,
            summary.max_belief,
            summary.mean_belief,
            summary.mean_abs_change
        ));
    }

    lines.join("\n")
}
