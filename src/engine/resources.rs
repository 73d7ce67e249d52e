//! Bevy resource definitions
//!
//! This module contains all global resources used by the rig systems.
//! Resources are singleton data that can be accessed by any system.

use bevy::prelude::*;

use crate::bridge::{SharedCameraPose, SharedHostInput};
use crate::config::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::rig::{FrameInput, RigSettings};

// =============================================================================
// Camera Control
// =============================================================================

/// Input assembled for the current frame
///
/// Rebuilt every frame by the gather systems. Host systems may add to it from
/// inside `GridCameraSystems::Gather`.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct RigFrameInput(pub FrameInput);

impl Default for RigFrameInput {
    fn default() -> Self {
        Self(FrameInput::idle(Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)))
    }
}

/// Keys that fire the discrete rotate triggers
#[derive(Resource, Debug, Clone, Copy)]
pub struct RigKeyBindings {
    pub rotate_positive: KeyCode,
    pub rotate_negative: KeyCode,
}

impl Default for RigKeyBindings {
    fn default() -> Self {
        Self {
            rotate_positive: KeyCode::KeyQ,
            rotate_negative: KeyCode::KeyE,
        }
    }
}

/// Viewport size used when no host reports one
#[derive(Resource, Debug, Clone, Copy)]
pub struct ViewportSize(pub Vec2);

impl Default for ViewportSize {
    fn default() -> Self {
        Self(Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT))
    }
}

/// Resource to hold shared host input in Bevy
#[derive(Resource)]
pub struct SharedInputRes(pub SharedHostInput);

/// Resource to publish the camera pose back to the host
#[derive(Resource)]
pub struct SharedPoseRes(pub SharedCameraPose);

// =============================================================================
// Frame Management
// =============================================================================

/// Counter for total frames integrated
#[derive(Resource, Default)]
pub struct FrameCount(pub u32);

/// Frame timing tracker for the periodic pose report
#[derive(Resource, Default)]
pub struct FrameTimings {
    pub last_print_time: f64,
    pub frame_times: Vec<f64>,
}

// =============================================================================
// Demo
// =============================================================================

/// Settings for the camera spawned by the demo scene
#[derive(Resource, Default)]
pub struct DemoRigSettings(pub RigSettings);
