//! Rig configuration
//!
//! All values are validated when they are written rather than every frame.
//! The zoom band corrects itself in the same edit that would break it, so a
//! `RigSettings` value always satisfies `0 < min_zoom <= max_zoom`.

use std::path::Path;

use bevy::math::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::error::RigError;
use crate::config::{camera, ranges};

/// Which corner of the viewport the host measures cursor coordinates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorOrigin {
    /// y grows upward from the bottom-left corner.
    #[default]
    BottomLeft,
    /// y grows downward from the top-left corner (window systems, Bevy's `Window`).
    TopLeft,
}

impl CursorOrigin {
    /// Convert a cursor position in this convention to bottom-left coordinates.
    pub fn to_bottom_left(self, cursor: Vec2, screen_size: Vec2) -> Vec2 {
        match self {
            CursorOrigin::BottomLeft => cursor,
            CursorOrigin::TopLeft => Vec2::new(cursor.x, screen_size.y - cursor.y),
        }
    }
}

/// Zoom bound touched by an edit; decides which side of the band yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZoomBound {
    Min,
    Max,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigSettings {
    /// Added once to the captured offset to skew the camera relative to the target.
    pub alignment_offset: Vec3,
    angle: f32,
    pub invert_x: bool,
    pub invert_y: bool,
    mouse_sensitivity: f32,
    position_rate: f32,
    rotation_rate: f32,
    pub invert_zoom: bool,
    zoom_sensitivity: f32,
    min_zoom: f32,
    max_zoom: f32,
    pub cursor_origin: CursorOrigin,
    /// Clamp interpolation factors to `[0, 1]`. Off by default, so large
    /// `rate * dt` values overshoot the way the rig always has.
    pub clamp_interpolation: bool,
}

impl Default for RigSettings {
    fn default() -> Self {
        Self {
            alignment_offset: Vec3::from_array(camera::ALIGNMENT_OFFSET),
            angle: camera::ROTATE_ANGLE,
            invert_x: false,
            invert_y: false,
            mouse_sensitivity: camera::MOUSE_SENSITIVITY,
            position_rate: camera::POSITION_RATE,
            rotation_rate: camera::ROTATION_RATE,
            invert_zoom: true,
            zoom_sensitivity: camera::ZOOM_SENSITIVITY,
            min_zoom: camera::MIN_ZOOM,
            max_zoom: camera::MAX_ZOOM,
            cursor_origin: CursorOrigin::BottomLeft,
            clamp_interpolation: false,
        }
    }
}

impl RigSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, RigError> {
        let mut settings: RigSettings = serde_json::from_str(json)?;
        settings.validate();
        Ok(settings)
    }

    /// Load settings from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RigError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Bring every field back into its allowed range.
    ///
    /// Used after bulk loads, where there is no single edited field. The
    /// minimum wins a conflict, matching the order an inspector applies it.
    pub fn validate(&mut self) {
        self.angle = clamp_range(self.angle, &ranges::ROTATE_ANGLE);
        self.mouse_sensitivity = clamp_range(self.mouse_sensitivity, &ranges::MOUSE_SENSITIVITY);
        self.zoom_sensitivity = clamp_range(self.zoom_sensitivity, &ranges::ZOOM_SENSITIVITY);
        self.position_rate = non_negative(self.position_rate);
        self.rotation_rate = non_negative(self.rotation_rate);
        self.correct_zoom_bounds(ZoomBound::Min);
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, degrees: f32) {
        self.angle = clamp_range(degrees, &ranges::ROTATE_ANGLE);
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = clamp_range(sensitivity, &ranges::MOUSE_SENSITIVITY);
    }

    pub fn position_rate(&self) -> f32 {
        self.position_rate
    }

    pub fn set_position_rate(&mut self, rate: f32) {
        self.position_rate = non_negative(rate);
    }

    pub fn rotation_rate(&self) -> f32 {
        self.rotation_rate
    }

    pub fn set_rotation_rate(&mut self, rate: f32) {
        self.rotation_rate = non_negative(rate);
    }

    pub fn zoom_sensitivity(&self) -> f32 {
        self.zoom_sensitivity
    }

    pub fn set_zoom_sensitivity(&mut self, sensitivity: f32) {
        self.zoom_sensitivity = clamp_range(sensitivity, &ranges::ZOOM_SENSITIVITY);
    }

    pub fn min_zoom(&self) -> f32 {
        self.min_zoom
    }

    /// Set the closest zoom distance. Raising it past `max_zoom` drags the
    /// maximum to `min_zoom + 1`.
    pub fn set_min_zoom(&mut self, distance: f32) {
        self.min_zoom = distance;
        self.correct_zoom_bounds(ZoomBound::Min);
    }

    pub fn max_zoom(&self) -> f32 {
        self.max_zoom
    }

    /// Set the farthest zoom distance. Lowering it under `min_zoom` drags the
    /// minimum to `max_zoom - 1`.
    pub fn set_max_zoom(&mut self, distance: f32) {
        self.max_zoom = distance;
        self.correct_zoom_bounds(ZoomBound::Max);
    }

    fn correct_zoom_bounds(&mut self, edited: ZoomBound) {
        match edited {
            ZoomBound::Min if self.min_zoom > self.max_zoom => self.max_zoom = self.min_zoom + 1.0,
            ZoomBound::Max if self.max_zoom < self.min_zoom => self.min_zoom = self.max_zoom - 1.0,
            _ => {}
        }
        if self.min_zoom <= 0.0 || self.min_zoom.is_nan() {
            self.min_zoom = 1.0;
        }
        if self.max_zoom <= 0.0 || self.max_zoom.is_nan() {
            self.max_zoom = 1.0;
        }
        // Only reachable when a bound was pushed back up to 1.
        if self.min_zoom > self.max_zoom {
            self.max_zoom = self.min_zoom;
        }
    }
}

fn clamp_range(value: f32, range: &std::ops::RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        return *range.start();
    }
    value.clamp(*range.start(), *range.end())
}

fn non_negative(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}
