//! Pose integrator
//!
//! Eases the camera toward the pose implied by the offset: position with a
//! lerp, rotation with a slerp. Both factors are `rate * dt` and are not
//! clamped unless the settings ask for it, so high rates overshoot.

use bevy::math::{Quat, Vec3};
use bevy::transform::components::Transform;

/// A camera position and orientation in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }
}

/// Rates and timestep for one integration step.
#[derive(Debug, Clone, Copy)]
pub struct Easing {
    pub position_rate: f32,
    pub rotation_rate: f32,
    pub delta_secs: f32,
    pub clamp: bool,
}

impl Easing {
    fn factor(&self, rate: f32) -> f32 {
        let t = rate * self.delta_secs;
        if self.clamp {
            t.clamp(0.0, 1.0)
        } else {
            t
        }
    }
}

/// Orientation whose view direction (`-Z`) points along `offset`.
///
/// The offset runs from the camera anchor toward the target, so looking along
/// it as given (not negated) faces the target. A zero offset keeps identity.
pub fn look_rotation(offset: Vec3) -> Quat {
    Transform::IDENTITY.looking_to(offset, Vec3::Y).rotation
}

/// One integration step from `current` toward the offset pose.
pub fn integrate(
    current: Pose,
    target: Vec3,
    offset: Vec3,
    parallax: Vec3,
    easing: Easing,
) -> Pose {
    let goal_rotation = look_rotation(offset);
    let rotation = current
        .rotation
        .slerp(goal_rotation, easing.factor(easing.rotation_rate))
        .normalize();

    let goal_translation = target - offset + parallax;
    let translation = current
        .translation
        .lerp(goal_translation, easing.factor(easing.position_rate));

    Pose {
        translation,
        rotation,
    }
}
