//! Bevy application setup and execution
//!
//! This module handles the creation and configuration of the headless demo
//! app, including plugin registration and system scheduling.

use bevy::{
    app::{App, ScheduleRunnerPlugin},
    log::LogPlugin,
    prelude::*,
    transform::TransformPlugin,
};
use std::thread;
use std::time::Duration;

use crate::bridge::{SharedCameraPose, SharedHostInput};
use crate::config::TARGET_FPS;
use crate::engine::plugins::GridCameraPlugin;
use crate::engine::resources::*;
use crate::engine::systems::{setup_scene, walk_grid};
use crate::rig::RigSettings;

/// Create and configure the Bevy application
pub fn create_app(
    host_input: SharedHostInput,
    camera_pose: SharedCameraPose,
    settings: RigSettings,
) -> App {
    let mut app = App::new();

    // No window: a fixed-rate loop drives the schedule
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / TARGET_FPS,
        ))),
    );
    app.add_plugins((LogPlugin::default(), TransformPlugin));

    app.add_plugins(GridCameraPlugin);

    // Register systems
    app.add_systems(Startup, setup_scene);
    app.add_systems(Update, walk_grid);

    // Insert resources
    app.insert_resource(SharedInputRes(host_input));
    app.insert_resource(SharedPoseRes(camera_pose));
    app.insert_resource(DemoRigSettings(settings));

    info!("[Bevy] App configured (headless grid camera)");
    app
}

/// Start Bevy in a background thread
pub fn start_bevy(host_input: SharedHostInput, camera_pose: SharedCameraPose, settings: RigSettings) {
    thread::spawn(move || {
        let mut app = create_app(host_input, camera_pose, settings);
        info!("[Bevy] Running update loop...");
        app.run();
    });
}
