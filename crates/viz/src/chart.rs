//! Belief chart: axes, neutral baseline, one line per trajectory.
//!
//! Lines are redrawn every frame with gizmos; text (title, captions, legend,
//! tick values) is spawned once per loaded report.

use bevy::prelude::*;
use bevy::sprite::Anchor;
use belief_events::{RunReport, Trajectory};

use crate::report_loader::{ReportState, ReportUpdatedEvent};

/// Plugin drawing the belief chart.
pub struct ChartPlugin;

impl Plugin for ChartPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChartLayout>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (rebuild_labels, draw_chart));
    }
}

/// Plot area in world coordinates (camera centered at origin).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    /// Bottom-left corner of the plot area
    pub origin: Vec2,
    pub size: Vec2,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            origin: Vec2::new(-520.0, -260.0),
            size: Vec2::new(800.0, 500.0),
        }
    }
}

impl ChartLayout {
    /// Maps (step, belief) to world coordinates.
    ///
    /// `last_step` is the largest step index on the x axis; a value of 0 puts
    /// everything on the left edge.
    pub fn to_world(&self, step: usize, belief: f64, last_step: usize) -> Vec2 {
        let x = if last_step == 0 {
            0.0
        } else {
            step as f32 / last_step as f32
        };
        let y = belief.clamp(0.0, 1.0) as f32;
        self.origin + Vec2::new(x * self.size.x, y * self.size.y)
    }

    pub fn top_left(&self) -> Vec2 {
        self.origin + Vec2::new(0.0, self.size.y)
    }

    pub fn right_edge(&self) -> f32 {
        self.origin.x + self.size.x
    }

    /// Polyline for one trajectory.
    pub fn series_points(&self, trajectory: &Trajectory, last_step: usize) -> Vec<Vec2> {
        trajectory
            .beliefs
            .iter()
            .enumerate()
            .map(|(step, &belief)| self.to_world(step, belief, last_step))
            .collect()
    }

    /// Dash segments for a horizontal line at `belief`.
    pub fn dashes(&self, belief: f64, dash: f32, gap: f32) -> Vec<(Vec2, Vec2)> {
        let y = self.to_world(0, belief, 1).y;
        let end = self.right_edge();
        let mut segments = Vec::new();
        let mut x = self.origin.x;
        while x < end {
            segments.push((Vec2::new(x, y), Vec2::new((x + dash).min(end), y)));
            x += dash + gap;
        }
        segments
    }
}

/// Line colour for the series at `index`.
pub fn series_color(index: usize) -> Color {
    const PALETTE: [(f32, f32, f32); 6] = [
        (0.12, 0.47, 0.71), // blue
        (1.0, 0.5, 0.05),   // orange
        (0.17, 0.63, 0.17), // green
        (0.84, 0.15, 0.16), // red
        (0.58, 0.4, 0.74),  // purple
        (0.55, 0.34, 0.29), // brown
    ];
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    Color::srgb(r, g, b)
}

const AXIS_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);
const GRID_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.12);
const BASELINE_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);
const TEXT_COLOR: Color = Color::srgb(0.1, 0.1, 0.1);

/// Marker for text spawned from the current report.
#[derive(Component)]
pub struct ChartLabel;

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

fn draw_chart(mut gizmos: Gizmos, layout: Res<ChartLayout>, state: Res<ReportState>) {
    // Grid every 0.25 belief
    for i in 1..4 {
        let y = layout.to_world(0, i as f64 * 0.25, 1).y;
        gizmos.line_2d(
            Vec2::new(layout.origin.x, y),
            Vec2::new(layout.right_edge(), y),
            GRID_COLOR,
        );
    }

    // Axes
    gizmos.line_2d(layout.origin, layout.top_left(), AXIS_COLOR);
    gizmos.line_2d(
        layout.origin,
        Vec2::new(layout.right_edge(), layout.origin.y),
        AXIS_COLOR,
    );

    let Some(report) = state.report.as_ref() else {
        return;
    };

    for (start, end) in layout.dashes(report.neutral_baseline, 4.0, 4.0) {
        gizmos.line_2d(start, end, BASELINE_COLOR);
    }

    let last_step = report.max_len().saturating_sub(1);
    for (i, trajectory) in report.trajectories.iter().enumerate() {
        gizmos.linestrip_2d(layout.series_points(trajectory, last_step), series_color(i));
    }
}

fn text(value: impl Into<String>, font_size: f32, color: Color) -> Text {
    Text::from_section(
        value,
        TextStyle {
            font_size,
            color,
            ..default()
        },
    )
}

fn spawn_text(commands: &mut Commands, text: Text, position: Vec2, anchor: Anchor) {
    commands.spawn((
        Text2dBundle {
            text,
            text_anchor: anchor,
            transform: Transform::from_xyz(position.x, position.y, 1.0),
            ..default()
        },
        ChartLabel,
    ));
}

/// Rebuilds every label when a report is (re)loaded.
fn rebuild_labels(
    mut commands: Commands,
    mut events: EventReader<ReportUpdatedEvent>,
    layout: Res<ChartLayout>,
    state: Res<ReportState>,
    labels: Query<Entity, With<ChartLabel>>,
) {
    if events.read().count() == 0 {
        return;
    }

    for entity in labels.iter() {
        commands.entity(entity).despawn_recursive();
    }

    spawn_text(
        &mut commands,
        text("Belief (past output) acting as filter (current input)", 22.0, TEXT_COLOR),
        layout.top_left() + Vec2::new(layout.size.x / 2.0, 40.0),
        Anchor::Center,
    );
    spawn_text(
        &mut commands,
        text("Steps of interaction with reality", 16.0, TEXT_COLOR),
        layout.origin + Vec2::new(layout.size.x / 2.0, -40.0),
        Anchor::Center,
    );
    spawn_text(
        &mut commands,
        text("Belief strength (0.0 to 1.0)", 16.0, TEXT_COLOR),
        layout.top_left() + Vec2::new(0.0, 16.0),
        Anchor::BottomCenter,
    );

    for i in 0..=4 {
        let belief = i as f64 * 0.25;
        spawn_text(
            &mut commands,
            text(format!("{:.2}", belief), 13.0, TEXT_COLOR),
            layout.to_world(0, belief, 1) - Vec2::new(8.0, 0.0),
            Anchor::CenterRight,
        );
    }

    if let Some(ref error) = state.last_error {
        spawn_text(
            &mut commands,
            text(error.clone(), 14.0, Color::srgb(0.8, 0.1, 0.1)),
            layout.origin + Vec2::new(0.0, -70.0),
            Anchor::TopLeft,
        );
    }

    let Some(report) = state.report.as_ref() else {
        return;
    };

    let last_step = report.max_len().saturating_sub(1);
    spawn_text(
        &mut commands,
        text("0", 13.0, TEXT_COLOR),
        layout.origin - Vec2::new(0.0, 8.0),
        Anchor::TopCenter,
    );
    spawn_text(
        &mut commands,
        text(last_step.to_string(), 13.0, TEXT_COLOR),
        Vec2::new(layout.right_edge(), layout.origin.y - 8.0),
        Anchor::TopCenter,
    );

    spawn_legend(&mut commands, &layout, report);
}

fn spawn_legend(commands: &mut Commands, layout: &ChartLayout, report: &RunReport) {
    let x = layout.right_edge() + 20.0;
    let mut y = layout.top_left().y;

    for (i, trajectory) in report.trajectories.iter().enumerate() {
        spawn_text(
            commands,
            text(&trajectory.label, 13.0, series_color(i)),
            Vec2::new(x, y),
            Anchor::TopLeft,
        );
        y -= 22.0;
    }

    spawn_text(
        commands,
        text(
            format!("Neutral reality (mean {:.1})", report.neutral_baseline),
            13.0,
            BASELINE_COLOR,
        ),
        Vec2::new(x, y),
        Anchor::TopLeft,
    );
    y -= 22.0;

    spawn_text(
        commands,
        text(
            format!(
                "{} stimuli, {} bias, seed {}",
                report.stimulus_mode, report.bias_policy, report.seed
            ),
            12.0,
            TEXT_COLOR,
        ),
        Vec2::new(x, y),
        Anchor::TopLeft,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_world_corners() {
        let layout = ChartLayout {
            origin: Vec2::new(-100.0, -50.0),
            size: Vec2::new(200.0, 100.0),
        };

        assert_eq!(layout.to_world(0, 0.0, 10), Vec2::new(-100.0, -50.0));
        assert_eq!(layout.to_world(10, 1.0, 10), Vec2::new(100.0, 50.0));
        assert_eq!(layout.to_world(5, 0.5, 10), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_to_world_clamps_and_handles_zero_steps() {
        let layout = ChartLayout::default();

        assert_eq!(layout.to_world(0, 1.5, 0), layout.top_left());
        assert_eq!(layout.to_world(3, -0.2, 0), layout.origin);
    }

    #[test]
    fn test_series_points() {
        let layout = ChartLayout {
            origin: Vec2::ZERO,
            size: Vec2::new(100.0, 100.0),
        };
        let trajectory = Trajectory::new("t", 0.5, 0.5, vec![0.5, 0.75, 0.25]);

        let points = layout.series_points(&trajectory, 2);
        assert_eq!(
            points,
            vec![Vec2::new(0.0, 50.0), Vec2::new(50.0, 75.0), Vec2::new(100.0, 25.0)]
        );
    }

    #[test]
    fn test_dashes_cover_width() {
        let layout = ChartLayout {
            origin: Vec2::ZERO,
            size: Vec2::new(20.0, 10.0),
        };

        let dashes = layout.dashes(0.5, 4.0, 4.0);
        assert_eq!(dashes.len(), 3);
        assert_eq!(dashes[0], (Vec2::new(0.0, 5.0), Vec2::new(4.0, 5.0)));
        assert_eq!(dashes[2], (Vec2::new(16.0, 5.0), Vec2::new(20.0, 5.0)));
    }

    #[test]
    fn test_series_color_cycles() {
        assert_eq!(series_color(0), series_color(6));
        assert_ne!(series_color(0), series_color(1));
    }
}
