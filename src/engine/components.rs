//! Bevy component definitions
//!
//! This module contains the camera rig component and the markers used by the
//! demo scene.

use bevy::prelude::*;

use crate::rig::{CameraRig, RigSettings};

/// Third-person grid camera attached to a camera entity
///
/// Holds the rig state and a reference to the entity it follows. The target
/// can be swapped at any time; the captured offset is kept as it is, so the
/// camera keeps its old framing relative to the new target until the next
/// zoom or rotate.
#[derive(Component, Debug, Clone, Default)]
pub struct GridCamera {
    target: Option<Entity>,
    rig: CameraRig,
}

impl GridCamera {
    pub fn new(settings: RigSettings) -> Self {
        Self {
            target: None,
            rig: CameraRig::new(settings),
        }
    }

    pub fn with_target(mut self, target: Entity) -> Self {
        self.target = Some(target);
        self
    }

    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    /// Follow a different entity. The offset is not recaptured.
    pub fn set_target(&mut self, target: Entity) {
        self.target = Some(target);
    }

    pub fn set_invert_x(&mut self, invert: bool) {
        self.rig.settings_mut().invert_x = invert;
    }

    pub fn set_invert_y(&mut self, invert: bool) {
        self.rig.settings_mut().invert_y = invert;
    }

    pub fn set_invert_zoom(&mut self, invert: bool) {
        self.rig.settings_mut().invert_zoom = invert;
    }

    pub fn settings(&self) -> &RigSettings {
        self.rig.settings()
    }

    pub fn settings_mut(&mut self) -> &mut RigSettings {
        self.rig.settings_mut()
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }
}

/// Marker component for entities a grid camera may follow
#[derive(Component)]
pub struct GridCameraTarget;

/// Demo walker that hops around a square of grid cells
#[derive(Component, Debug, Default)]
pub struct GridWalker {
    /// Index of the current cell along the patrol loop
    pub step: i32,
    /// Seconds spent on the current cell
    pub dwell: f32,
}
