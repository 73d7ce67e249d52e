//! Scene setup system
//!
//! Spawns the demo target and the grid camera that follows it.

use bevy::prelude::*;

use crate::config::demo::CAMERA_START;
use crate::engine::components::{GridCamera, GridCameraTarget, GridWalker};
use crate::engine::resources::DemoRigSettings;

/// Setup the demo scene with a walking target and a following camera
pub fn setup_scene(mut commands: Commands, settings: Res<DemoRigSettings>) {
    info!("[Bevy] Setting up scene...");

    let target = commands
        .spawn((
            Transform::from_xyz(0.0, 0.0, 0.0),
            GridCameraTarget,
            GridWalker::default(),
        ))
        .id();

    // The camera is placed where it should sit relative to the target.
    let camera_start = Vec3::from_array(CAMERA_START);
    commands.spawn((
        Transform::from_translation(camera_start).looking_at(Vec3::ZERO, Vec3::Y),
        GridCamera::new(settings.0.clone()).with_target(target),
    ));

    info!("[Bevy] Scene setup complete!");
}
