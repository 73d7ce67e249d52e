//! Grid camera plugin
//!
//! Registers the rig resources and schedules the rig systems: offset capture
//! in `PreUpdate`, input and parallax in `Update`, pose integration in
//! `PostUpdate` ahead of transform propagation.

use bevy::{prelude::*, transform::TransformSystems};

use crate::engine::resources::{FrameCount, FrameTimings, RigFrameInput, RigKeyBindings, ViewportSize};
use crate::engine::systems::*;

/// Ordering of the rig's work within a frame
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridCameraSystems {
    /// Fill `RigFrameInput`. Host input systems belong here too.
    Gather,
    /// Apply rotate triggers and zoom.
    Input,
    /// Recompute the cursor parallax.
    Parallax,
    /// Ease the camera transform toward its goal (`PostUpdate`).
    Integrate,
}

pub struct GridCameraPlugin;

impl Plugin for GridCameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RigFrameInput>()
            .init_resource::<RigKeyBindings>()
            .init_resource::<ViewportSize>()
            .init_resource::<FrameCount>()
            .init_resource::<FrameTimings>();

        app.configure_sets(
            Update,
            (
                GridCameraSystems::Gather,
                GridCameraSystems::Input,
                GridCameraSystems::Parallax,
            )
                .chain(),
        );
        app.configure_sets(
            PostUpdate,
            GridCameraSystems::Integrate.before(TransformSystems::Propagate),
        );

        // Offsets are captured before anything in `Update` can move a target.
        app.add_systems(PreUpdate, (begin_frame_input, initialize_rigs).chain());
        app.add_systems(
            Update,
            (gather_device_input, gather_bridge_input)
                .chain()
                .in_set(GridCameraSystems::Gather),
        );
        app.add_systems(Update, apply_rig_input.in_set(GridCameraSystems::Input));
        app.add_systems(Update, update_rig_parallax.in_set(GridCameraSystems::Parallax));
        app.add_systems(
            PostUpdate,
            (integrate_rig_pose.in_set(GridCameraSystems::Integrate), publish_camera_pose)
                .chain(),
        );
    }
}
