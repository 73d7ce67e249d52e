//! Rotation controller

use bevy::math::{Quat, Vec3};

/// Which of the two rotate triggers fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Positive,
    Negative,
}

impl RotateDirection {
    /// Signed yaw for a configured trigger angle.
    pub fn signed(self, angle_degrees: f32) -> f32 {
        match self {
            RotateDirection::Positive => angle_degrees,
            RotateDirection::Negative => -angle_degrees,
        }
    }
}

/// Rotate the offset about world up. Length is preserved; the jump is eased
/// later by the pose integrator's slerp.
pub fn rotate_offset(offset: Vec3, angle_degrees: f32) -> Vec3 {
    Quat::from_axis_angle(Vec3::Y, angle_degrees.to_radians()) * offset
}
