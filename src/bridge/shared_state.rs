//! Shared state structures for communication between the host and Bevy
//!
//! This module defines thread-safe data structures that let a host running
//! outside the Bevy thread feed input to the rig and read the camera pose back.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use crate::config::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

// =============================================================================
// Host Input
// =============================================================================

/// Input state received from the host
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HostInput {
    /// Latest cursor position in pixels
    pub cursor_x: f32,
    pub cursor_y: f32,
    /// Current viewport size in pixels
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Accumulated scroll wheel delta
    pub scroll_delta: f32,
    /// Positive rotate presses not yet consumed
    pub rotate_positive: u32,
    /// Negative rotate presses not yet consumed
    pub rotate_negative: u32,
}

impl Default for HostInput {
    fn default() -> Self {
        Self {
            cursor_x: VIEWPORT_WIDTH * 0.5,
            cursor_y: VIEWPORT_HEIGHT * 0.5,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            scroll_delta: 0.0,
            rotate_positive: 0,
            rotate_negative: 0,
        }
    }
}

impl HostInput {
    /// Clear the accumulated one-shot values after Bevy has read them
    pub fn clear_accumulated(&mut self) {
        self.scroll_delta = 0.0;
        self.rotate_positive = 0;
        self.rotate_negative = 0;
    }
}

/// Thread-safe host input shared between the host and Bevy
#[derive(Clone, Default)]
pub struct SharedHostInput(pub Arc<Mutex<HostInput>>);

// =============================================================================
// Camera Pose
// =============================================================================

/// Camera pose published every frame
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraPose {
    pub translation: [f32; 3],
    /// Rotation quaternion as `[x, y, z, w]`
    pub rotation: [f32; 4],
    /// Current target-to-camera offset, if captured
    pub offset: Option<[f32; 3]>,
    pub frame: u32,
}

/// Thread-safe latest camera pose
#[derive(Clone, Default)]
pub struct SharedCameraPose(pub Arc<Mutex<Option<CameraPose>>>);
