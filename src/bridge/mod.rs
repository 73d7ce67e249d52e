//! Bridge layer between the host and Bevy
//!
//! This module handles communication between a host running on its own
//! thread and the Bevy app driving the camera rig: command handlers and
//! shared state.

pub mod commands;
pub mod shared_state;

// Re-export commonly used types
pub use shared_state::{CameraPose, HostInput, SharedCameraPose, SharedHostInput};
