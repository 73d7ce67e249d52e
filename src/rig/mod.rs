//! Camera rig core
//!
//! Engine-independent state and math for the grid camera. Every host input is
//! passed in explicitly, so a frame can be replayed in a unit test without a
//! running app.
//!
//! Per frame the host calls, in order:
//! 1. [`CameraRig::apply_input`]: rotate triggers, scroll zoom, then parallax
//! 2. [`CameraRig::integrate`]: after the target has finished moving

pub mod error;
pub mod offset;
pub mod parallax;
pub mod pose;
pub mod rotation;
pub mod settings;
pub mod zoom;

use bevy::math::{Quat, Vec2, Vec3};

pub use error::RigError;
pub use offset::{initialize_offset, CameraAxes};
pub use parallax::compute_parallax;
pub use pose::{integrate, look_rotation, Easing, Pose};
pub use rotation::{rotate_offset, RotateDirection};
pub use settings::{CursorOrigin, RigSettings};
pub use zoom::zoom_offset;

/// Host input for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Cursor position in pixels, in the rig's configured [`CursorOrigin`].
    pub cursor: Vec2,
    /// Viewport size in pixels.
    pub screen_size: Vec2,
    /// Signed scroll amount, zero when nothing scrolled.
    pub scroll_delta: f32,
    /// Presses of the positive rotate trigger this frame.
    pub rotate_positive: u32,
    /// Presses of the negative rotate trigger this frame.
    pub rotate_negative: u32,
}

impl FrameInput {
    /// Input with the cursor resting at the viewport centre and nothing pressed.
    pub fn idle(screen_size: Vec2) -> Self {
        Self {
            cursor: screen_size * 0.5,
            screen_size,
            scroll_delta: 0.0,
            rotate_positive: 0,
            rotate_negative: 0,
        }
    }
}

/// Offset, parallax and settings of one camera.
#[derive(Debug, Clone, Default)]
pub struct CameraRig {
    settings: RigSettings,
    offset: Option<Vec3>,
    parallax: Vec3,
}

impl CameraRig {
    pub fn new(settings: RigSettings) -> Self {
        Self {
            settings,
            offset: None,
            parallax: Vec3::ZERO,
        }
    }

    /// Rig with an already known offset, skipping the capture step.
    pub fn with_offset(settings: RigSettings, offset: Vec3) -> Self {
        Self {
            settings,
            offset: Some(offset),
            parallax: Vec3::ZERO,
        }
    }

    pub fn settings(&self) -> &RigSettings {
        &self.settings
    }

    /// Settings are edited in place; their setters keep them valid.
    pub fn settings_mut(&mut self) -> &mut RigSettings {
        &mut self.settings
    }

    pub fn offset(&self) -> Option<Vec3> {
        self.offset
    }

    pub fn parallax(&self) -> Vec3 {
        self.parallax
    }

    pub fn is_initialized(&self) -> bool {
        self.offset.is_some()
    }

    /// Capture the offset from the current target and camera positions.
    /// Later calls keep the first capture.
    pub fn initialize(&mut self, target: Option<Vec3>, camera: Vec3) -> Result<Vec3, RigError> {
        if let Some(offset) = self.offset {
            return Ok(offset);
        }
        let offset = initialize_offset(target, camera, self.settings.alignment_offset)?;
        self.offset = Some(offset);
        Ok(offset)
    }

    /// Yaw the offset by the configured angle.
    pub fn rotate(&mut self, direction: RotateDirection) -> Result<Vec3, RigError> {
        let offset = self.offset.ok_or(RigError::NotInitialized)?;
        let rotated = rotate_offset(offset, direction.signed(self.settings.angle()));
        self.offset = Some(rotated);
        Ok(rotated)
    }

    /// Dolly along the camera's forward axis. Returns whether the step was kept.
    pub fn zoom(&mut self, scroll_delta: f32, camera_rotation: Quat) -> Result<bool, RigError> {
        let offset = self.offset.ok_or(RigError::NotInitialized)?;
        let forward = CameraAxes::from_rotation(camera_rotation).forward;
        let zoomed = zoom_offset(
            scroll_delta,
            self.settings.invert_zoom,
            forward,
            self.settings.zoom_sensitivity(),
            self.settings.min_zoom(),
            self.settings.max_zoom(),
            offset,
        );
        if let Some(zoomed) = zoomed {
            self.offset = Some(zoomed);
        }
        Ok(zoomed.is_some())
    }

    /// Recompute the cursor parallax for this frame.
    pub fn update_parallax(&mut self, cursor: Vec2, screen_size: Vec2, camera_rotation: Quat) -> Vec3 {
        let axes = CameraAxes::from_rotation(camera_rotation);
        let cursor = self.settings.cursor_origin.to_bottom_left(cursor, screen_size);
        self.parallax = compute_parallax(
            cursor,
            screen_size,
            self.settings.invert_x,
            self.settings.invert_y,
            self.settings.mouse_sensitivity(),
            axes.right,
            axes.up,
        );
        self.parallax
    }

    /// Rotate triggers, then zoom. Returns whether the zoom step was kept,
    /// or `None` when nothing scrolled this frame.
    pub fn apply_discrete_input(
        &mut self,
        input: &FrameInput,
        camera_rotation: Quat,
    ) -> Result<Option<bool>, RigError> {
        for _ in 0..input.rotate_positive {
            self.rotate(RotateDirection::Positive)?;
        }
        for _ in 0..input.rotate_negative {
            self.rotate(RotateDirection::Negative)?;
        }
        if input.scroll_delta == 0.0 {
            return Ok(None);
        }
        self.zoom(input.scroll_delta, camera_rotation).map(Some)
    }

    /// Input phase of a frame: rotate triggers, zoom, then parallax.
    pub fn apply_input(&mut self, input: &FrameInput, camera_rotation: Quat) -> Result<(), RigError> {
        self.apply_discrete_input(input, camera_rotation)?;
        self.update_parallax(input.cursor, input.screen_size, camera_rotation);
        Ok(())
    }

    /// Late phase of a frame: ease `camera` toward the offset pose around `target`.
    pub fn integrate(&self, camera: Pose, target: Vec3, delta_secs: f32) -> Result<Pose, RigError> {
        let offset = self.offset.ok_or(RigError::NotInitialized)?;
        Ok(integrate(
            camera,
            target,
            offset,
            self.parallax,
            Easing {
                position_rate: self.settings.position_rate(),
                rotation_rate: self.settings.rotation_rate(),
                delta_secs,
                clamp: self.settings.clamp_interpolation,
            },
        ))
    }
}
