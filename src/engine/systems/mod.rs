//! Bevy systems
//!
//! This module contains the rig systems and the demo scene systems.

pub mod animation;
pub mod input;
pub mod rig;
pub mod scene;
pub mod telemetry;

pub use animation::walk_grid;
pub use input::{begin_frame_input, gather_bridge_input, gather_device_input};
pub use rig::{apply_rig_input, initialize_rigs, integrate_rig_pose, update_rig_parallax};
pub use scene::setup_scene;
pub use telemetry::publish_camera_pose;
