//! Integration tests for the visualization layer.

use belief_events::fixtures::sample_report;
use belief_events::RunReport;
use viz::chart::ChartLayout;
use viz::report_loader::read_report;

/// Test parsing the sample report file through the loader.
#[test]
fn test_read_sample_report() {
    let path = std::path::Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../belief-events/tests/fixtures/sample_report.json"
    ));
    let report: RunReport = read_report(path).unwrap();

    assert_eq!(report.trajectories.len(), 2);
    assert_eq!(report.neutral_baseline, 0.5);
}

/// Every series maps inside the plot area.
#[test]
fn test_sample_series_inside_plot_area() {
    let report = sample_report();
    let layout = ChartLayout::default();
    let last_step = report.max_len() - 1;

    for trajectory in &report.trajectories {
        let points = layout.series_points(trajectory, last_step);
        assert_eq!(points.len(), trajectory.beliefs.len());

        for point in points {
            assert!(point.x >= layout.origin.x && point.x <= layout.right_edge());
            assert!(point.y >= layout.origin.y && point.y <= layout.top_left().y);
        }
    }
}

/// The last point of every series sits on the right edge.
#[test]
fn test_series_end_on_right_edge() {
    let report = sample_report();
    let layout = ChartLayout::default();
    let last_step = report.max_len() - 1;

    for trajectory in &report.trajectories {
        let points = layout.series_points(trajectory, last_step);
        let last = points.last().unwrap();
        assert!((last.x - layout.right_edge()).abs() < 1e-3);
    }
}
