//! Camera rig systems
//!
//! Offset capture, discrete input, parallax and the late pose integration.
//! Ordering is set up by `GridCameraPlugin`.

use bevy::{ecs::error::Result, prelude::*};

use crate::engine::components::GridCamera;
use crate::engine::resources::RigFrameInput;
use crate::rig::{Pose, RigError};

/// Capture the offset of every rig that has not started yet
///
/// Runs in `PreUpdate`, so the offset reflects where the target stood before
/// any `Update` system moved it this frame.
///
/// A rig without a target, or with a target that has no transform, is a
/// setup mistake and is returned as an error instead of following nothing.
pub fn initialize_rigs(
    mut cameras: Query<(Entity, &mut GridCamera, &Transform)>,
    targets: Query<&Transform, Without<GridCamera>>,
) -> Result {
    for (entity, mut camera, transform) in &mut cameras {
        if camera.rig().is_initialized() {
            continue;
        }
        let target = camera
            .target()
            .ok_or(RigError::MissingTargetEntity(entity))?;
        let target_transform = targets
            .get(target)
            .map_err(|_| RigError::TargetNotFound(target))?;
        let offset = camera
            .rig_mut()
            .initialize(Some(target_transform.translation), transform.translation)?;
        info!("[Rig] Camera {} following {} with offset {}", entity, target, offset);
    }
    Ok(())
}

/// Apply rotate triggers and scroll zoom for this frame
pub fn apply_rig_input(
    input: Res<RigFrameInput>,
    mut cameras: Query<(&mut GridCamera, &Transform)>,
) -> Result {
    let frame = input.0;
    if frame.rotate_positive == 0 && frame.rotate_negative == 0 && frame.scroll_delta == 0.0 {
        return Ok(());
    }

    for (mut camera, transform) in &mut cameras {
        let rig = camera.rig_mut();
        if !rig.is_initialized() {
            continue;
        }
        if rig.apply_discrete_input(&frame, transform.rotation)? == Some(false) {
            debug!("[Rig] Zoom step {} discarded at band edge", frame.scroll_delta);
        }
    }
    Ok(())
}

/// Recompute the cursor parallax of every rig
pub fn update_rig_parallax(
    input: Res<RigFrameInput>,
    mut cameras: Query<(&mut GridCamera, &Transform)>,
) {
    let frame = input.0;
    for (mut camera, transform) in &mut cameras {
        camera
            .rig_mut()
            .update_parallax(frame.cursor, frame.screen_size, transform.rotation);
    }
}

/// Ease each camera toward its offset pose
///
/// Runs late, after everything that moves targets, so the camera never trails
/// its target by a frame. Targets are read through their `Transform`, so they
/// are expected to be root entities.
pub fn integrate_rig_pose(
    time: Res<Time>,
    mut cameras: Query<(Entity, &GridCamera, &mut Transform)>,
    targets: Query<&Transform, Without<GridCamera>>,
) -> Result {
    let dt = time.delta_secs();
    for (entity, camera, mut transform) in &mut cameras {
        if !camera.rig().is_initialized() {
            continue;
        }
        let Some(target) = camera.target() else {
            continue;
        };
        let Ok(target_transform) = targets.get(target) else {
            warn_once!("[Rig] Camera {} lost its target {}; holding pose", entity, target);
            continue;
        };

        let pose = camera.rig().integrate(
            Pose::new(transform.translation, transform.rotation),
            target_transform.translation,
            dt,
        )?;
        transform.translation = pose.translation;
        transform.rotation = pose.rotation;
    }
    Ok(())
}
