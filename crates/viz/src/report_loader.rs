//! Report loading and file watching.
//!
//! Loads the run report on startup, reloads it when the simulation rewrites
//! the file, and on the R key.

use bevy::prelude::*;
use belief_events::RunReport;
use notify::{Event as NotifyEvent, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Instant;

/// Plugin for loading the run report from disk.
pub struct ReportLoaderPlugin;

impl Plugin for ReportLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ReportPath>()
            .init_resource::<ReportState>()
            .add_event::<ReportUpdatedEvent>()
            .add_systems(Update, (check_file_updates, handle_reload_key).chain());
    }
}

/// Path of the report file to display.
#[derive(Resource, Debug, Clone)]
pub struct ReportPath(pub PathBuf);

impl Default for ReportPath {
    fn default() -> Self {
        Self(PathBuf::from("output/report.json"))
    }
}

/// Currently loaded report.
#[derive(Resource, Default)]
pub struct ReportState {
    pub report: Option<RunReport>,
    pub last_update: Option<Instant>,
    /// Error from the last load attempt, shown on screen
    pub last_error: Option<String>,
}

impl ReportState {
    pub fn has_report(&self) -> bool {
        self.report.is_some()
    }

    /// Loads `path`, keeping the previous report if loading fails.
    ///
    /// Returns true when a new report was loaded.
    pub fn load(&mut self, path: &Path) -> bool {
        match read_report(path) {
            Ok(report) => {
                tracing::info!(
                    "Loaded report {} from {:?} ({} series, {} steps)",
                    report.report_id,
                    path,
                    report.trajectories.len(),
                    report.steps
                );
                self.report = Some(report);
                self.last_update = Some(Instant::now());
                self.last_error = None;
                true
            }
            Err(e) => {
                tracing::warn!("Failed to load report from {:?}: {}", path, e);
                self.last_error = Some(e);
                false
            }
        }
    }
}

/// Event emitted when a report has been (re)loaded.
#[derive(Event)]
pub struct ReportUpdatedEvent;

/// Reads and parses a report file.
pub fn read_report(path: &Path) -> Result<RunReport, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Could not read {}: {}", path.display(), e))?;
    RunReport::from_json(&contents).map_err(|e| format!("Could not parse {}: {}", path.display(), e))
}

/// File watching state stored in Local (doesn't need Send+Sync).
#[derive(Default)]
struct FileWatcherState {
    watcher: Option<RecommendedWatcher>,
    rx: Option<Receiver<Result<NotifyEvent, notify::Error>>>,
    initialized: bool,
}

impl FileWatcherState {
    /// Starts watching the report's directory and performs the first load.
    /// Returns true on the first call, loaded or not, so the labels (or the
    /// load error) get drawn.
    fn ensure_initialized(&mut self, path: &Path, state: &mut ReportState) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;

        let watch_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let (tx, rx) = channel();
        match RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            notify::Config::default(),
        ) {
            Ok(mut watcher) => {
                if watch_dir.exists() {
                    if let Err(e) = watcher.watch(&watch_dir, RecursiveMode::NonRecursive) {
                        tracing::warn!("Failed to watch directory {:?}: {}", watch_dir, e);
                    } else {
                        tracing::info!("Watching directory: {:?}", watch_dir);
                    }
                } else {
                    tracing::info!(
                        "Watch directory {:?} does not exist yet, press R to reload",
                        watch_dir
                    );
                }
                self.watcher = Some(watcher);
                self.rx = Some(rx);
            }
            Err(e) => {
                tracing::error!("Failed to create file watcher: {}", e);
            }
        }

        state.load(path);
        true
    }
}

fn check_file_updates(
    mut watcher_state: Local<FileWatcherState>,
    path: Res<ReportPath>,
    mut state: ResMut<ReportState>,
    mut events: EventWriter<ReportUpdatedEvent>,
) {
    if watcher_state.ensure_initialized(&path.0, &mut state) {
        events.send(ReportUpdatedEvent);
    }

    let Some(ref rx) = watcher_state.rx else {
        return;
    };

    let file_name = path.0.file_name();
    let mut changed = false;
    while let Ok(result) = rx.try_recv() {
        match result {
            Ok(event) => {
                let is_relevant = event.paths.iter().any(|p| p.file_name() == file_name);
                if is_relevant
                    && matches!(
                        event.kind,
                        notify::EventKind::Modify(_) | notify::EventKind::Create(_)
                    )
                {
                    tracing::debug!("Detected file change: {:?}", event.paths);
                    changed = true;
                }
            }
            Err(e) => {
                tracing::warn!("File watcher error: {}", e);
            }
        }
    }

    if changed && state.load(&path.0) {
        events.send(ReportUpdatedEvent);
    }
}

/// Handle R key to force reload.
fn handle_reload_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    path: Res<ReportPath>,
    mut state: ResMut<ReportState>,
    mut events: EventWriter<ReportUpdatedEvent>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        tracing::info!("Manual reload triggered");
        state.load(&path.0);
        // Labels are rebuilt either way so a load error becomes visible
        events.send(ReportUpdatedEvent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_sets_error() {
        let mut state = ReportState::default();
        assert!(!state.load(Path::new("does/not/exist.json")));
        assert!(!state.has_report());
        assert!(state.last_error.as_deref().unwrap().starts_with("Could not read"));
    }

    #[test]
    fn test_load_keeps_previous_report_on_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        let json = include_str!("../../belief-events/tests/fixtures/sample_report.json");
        std::fs::write(&path, json).unwrap();

        let mut state = ReportState::default();
        assert!(state.load(&path));
        assert!(state.last_error.is_none());

        std::fs::write(&path, "{ broken").unwrap();
        assert!(!state.load(&path));
        assert!(state.has_report());
        assert!(state.last_error.as_deref().unwrap().starts_with("Could not parse"));
    }

    #[test]
    fn test_default_report_path() {
        assert_eq!(ReportPath::default().0, PathBuf::from("output/report.json"));
    }
}
