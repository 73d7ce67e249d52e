//! Bevy plugins
//!
//! This module contains the plugin that wires the camera rig into an app.

pub mod grid_camera;

pub use grid_camera::{GridCameraPlugin, GridCameraSystems};
