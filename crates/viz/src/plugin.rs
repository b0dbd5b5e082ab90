//! Main visualization plugin that ties all systems together.

use bevy::prelude::*;

use crate::chart::ChartPlugin;
use crate::report_loader::ReportLoaderPlugin;

/// Main plugin for the belief chart.
///
/// Sets up the window and adds the report loader and chart plugins.
pub struct BeliefVizPlugin;

impl Plugin for BeliefVizPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.97, 0.97, 0.95)))
            .add_plugins(DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Belief Feedback Simulation".into(),
                    resolution: (1280., 720.).into(),
                    ..default()
                }),
                ..default()
            }))
            .add_plugins((ReportLoaderPlugin, ChartPlugin));
    }
}
