//! Zoom controller

use bevy::math::Vec3;

/// Dolly the offset along the camera's forward axis.
///
/// The step follows the camera's current forward, not the offset direction,
/// so the offset can drift sideways while the camera is still turning. The
/// band check runs on the resulting magnitude, which is why the bounds hold
/// for accepted steps only.
///
/// Returns the new offset when its length lands strictly inside
/// `(min_zoom, max_zoom)`, or `None` when the step is discarded.
pub fn zoom_offset(
    scroll_delta: f32,
    invert_zoom: bool,
    forward: Vec3,
    zoom_sensitivity: f32,
    min_zoom: f32,
    max_zoom: f32,
    offset: Vec3,
) -> Option<Vec3> {
    let direction = if invert_zoom { -scroll_delta } else { scroll_delta };
    let candidate = offset + forward * direction * zoom_sensitivity;
    let length = candidate.length();
    (length > min_zoom && length < max_zoom).then_some(candidate)
}
