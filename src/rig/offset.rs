//! Offset model
//!
//! The offset is the vector from the target to the camera anchor. It is
//! captured once and afterwards only changes through zoom and rotation.

use bevy::math::{Quat, Vec3};

use super::error::RigError;

/// Capture the initial offset.
///
/// `target` is `None` when the rig was never given something to follow. That
/// is a configuration error and is reported instead of falling back to a zero
/// offset.
pub fn initialize_offset(
    target: Option<Vec3>,
    camera: Vec3,
    alignment_offset: Vec3,
) -> Result<Vec3, RigError> {
    let target = target.ok_or(RigError::MissingTarget)?;
    Ok(target - camera + alignment_offset)
}

/// Camera basis vectors in world space. Cameras look down their local `-Z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraAxes {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl CameraAxes {
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            forward: rotation * Vec3::NEG_Z,
            right: rotation * Vec3::X,
            up: rotation * Vec3::Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_includes_alignment() {
        let offset = initialize_offset(Some(Vec3::ZERO), Vec3::new(0.0, -4.0, 10.0), Vec3::Y)
            .unwrap();
        assert_eq!(offset, Vec3::new(0.0, 5.0, -10.0));
    }

    #[test]
    fn missing_target_fails_fast() {
        let err = initialize_offset(None, Vec3::ONE, Vec3::Y).unwrap_err();
        assert!(matches!(err, RigError::MissingTarget));
    }

    #[test]
    fn identity_axes() {
        let axes = CameraAxes::from_rotation(Quat::IDENTITY);
        assert_eq!(axes.forward, Vec3::NEG_Z);
        assert_eq!(axes.right, Vec3::X);
        assert_eq!(axes.up, Vec3::Y);
    }
}
