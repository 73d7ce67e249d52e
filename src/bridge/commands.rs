//! Host command handlers
//!
//! Functions the host calls from its own thread. Input is accumulated until
//! Bevy consumes it at the start of its next frame.

use super::shared_state::{CameraPose, SharedCameraPose, SharedHostInput};
use crate::rig::RotateDirection;

/// Report the latest cursor position
pub fn send_cursor(state: &SharedHostInput, x: f32, y: f32) -> Result<(), String> {
    let mut guard = state.0.lock().map_err(|e| e.to_string())?;
    guard.cursor_x = x;
    guard.cursor_y = y;
    Ok(())
}

/// Accumulate a scroll wheel delta
pub fn send_scroll(state: &SharedHostInput, scroll_delta: f32) -> Result<(), String> {
    let mut guard = state.0.lock().map_err(|e| e.to_string())?;
    guard.scroll_delta += scroll_delta;
    Ok(())
}

/// Register one press of a rotate trigger
pub fn send_rotate(state: &SharedHostInput, direction: RotateDirection) -> Result<(), String> {
    let mut guard = state.0.lock().map_err(|e| e.to_string())?;
    match direction {
        RotateDirection::Positive => guard.rotate_positive += 1,
        RotateDirection::Negative => guard.rotate_negative += 1,
    }
    Ok(())
}

/// Report a new viewport size
pub fn resize_viewport(state: &SharedHostInput, width: f32, height: f32) -> Result<(), String> {
    if width <= 0.0 || height <= 0.0 {
        return Err(format!("invalid viewport size {width}x{height}"));
    }
    let mut guard = state.0.lock().map_err(|e| e.to_string())?;
    guard.viewport_width = width;
    guard.viewport_height = height;
    Ok(())
}

/// Get the most recent camera pose
pub fn get_camera_pose(state: &SharedCameraPose) -> Result<CameraPose, String> {
    let guard = state.0.lock().map_err(|e| e.to_string())?;
    (*guard).ok_or_else(|| "No camera pose yet (rig still starting)".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_accumulates_until_cleared() {
        let state = SharedHostInput::default();
        send_scroll(&state, 1.0).unwrap();
        send_scroll(&state, 0.5).unwrap();
        send_rotate(&state, RotateDirection::Positive).unwrap();
        send_rotate(&state, RotateDirection::Negative).unwrap();
        send_rotate(&state, RotateDirection::Negative).unwrap();
        send_cursor(&state, 10.0, 20.0).unwrap();

        let mut guard = state.0.lock().unwrap();
        assert_eq!(guard.scroll_delta, 1.5);
        assert_eq!(guard.rotate_positive, 1);
        assert_eq!(guard.rotate_negative, 2);
        guard.clear_accumulated();
        assert_eq!(guard.scroll_delta, 0.0);
        assert_eq!(guard.rotate_negative, 0);
        assert_eq!((guard.cursor_x, guard.cursor_y), (10.0, 20.0));
    }

    #[test]
    fn rejects_empty_viewport() {
        let state = SharedHostInput::default();
        assert!(resize_viewport(&state, 0.0, 600.0).is_err());
        assert!(resize_viewport(&state, 1024.0, 768.0).is_ok());
        assert_eq!(state.0.lock().unwrap().viewport_width, 1024.0);
    }

    #[test]
    fn pose_missing_until_published() {
        let pose = SharedCameraPose::default();
        assert!(get_camera_pose(&pose).is_err());
        *pose.0.lock().unwrap() = Some(CameraPose {
            frame: 3,
            ..Default::default()
        });
        assert_eq!(get_camera_pose(&pose).unwrap().frame, 3);
    }
}
