//! Parallax controller
//!
//! A small displacement that follows the cursor. It is recomputed every frame
//! and never touches the offset.

use bevy::math::{Vec2, Vec3};

/// Displacement for a cursor at `cursor` (bottom-left origin, pixels).
///
/// The cursor is centred on the viewport, each axis is optionally flipped,
/// then scaled and laid along the camera's right and up axes.
pub fn compute_parallax(
    cursor: Vec2,
    screen_size: Vec2,
    invert_x: bool,
    invert_y: bool,
    mouse_sensitivity: f32,
    right: Vec3,
    up: Vec3,
) -> Vec3 {
    let mut centred = cursor - screen_size * 0.5;
    if invert_x {
        centred.x = -centred.x;
    }
    if invert_y {
        centred.y = -centred.y;
    }
    right * centred.x * mouse_sensitivity + up * centred.y * mouse_sensitivity
}
