//! Grid Camera Rig: a third-person follow camera for grid-based scenes
//!
//! The camera keeps a persistent offset to its target and layers four
//! motions on top of it every frame: smooth follow, cursor parallax,
//! discrete yaw turns, and distance-clamped zoom.
//!
//! Architecture:
//! - The rig core is plain math with explicit inputs, testable without an app
//! - A Bevy plugin runs input and parallax in `Update` and eases the camera
//!   in `PostUpdate`, after targets have moved
//! - A host on another thread feeds input and reads the pose through shared state
//!
//! # Module Structure
//!
//! - `config`: Configuration constants and settings
//! - `rig`: Engine-independent rig state and math
//! - `bridge`: Bridge layer between a host and Bevy
//!   - `shared_state`: Thread-safe data structures
//!   - `commands`: Host command handlers
//! - `engine`: Bevy engine integration
//!   - `components`: ECS components
//!   - `resources`: Global resources
//!   - `plugins`: Custom plugins
//!   - `systems`: Rig and demo systems
//!   - `app`: Application setup

pub mod bridge;
pub mod config;
pub mod engine;
pub mod rig;

use std::{thread, time::Duration, time::Instant};

use bevy::log::{info, warn};
use bridge::{commands, SharedCameraPose, SharedHostInput};
use config::{demo::RUN_SECONDS, STARTUP_GRACE_MS, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use rig::{RigError, RigSettings, RotateDirection};

/// Run the headless demo: Bevy follows a walking target while this thread
/// plays the host, sweeping the cursor, scrolling and turning the camera.
pub fn run(settings_path: Option<String>) -> Result<(), RigError> {
    let settings = match settings_path {
        Some(path) => RigSettings::load(path)?,
        None => RigSettings::default(),
    };

    // Create shared state
    let host_input = SharedHostInput::default();
    let camera_pose = SharedCameraPose::default();

    // Start Bevy in background thread
    engine::start_bevy(host_input.clone(), camera_pose.clone(), settings);

    // Wait for Bevy to initialize
    thread::sleep(Duration::from_millis(STARTUP_GRACE_MS));
    info!("[Host] Driving input for {RUN_SECONDS}s");

    let started = Instant::now();
    let mut last_event = 0u32;
    while started.elapsed().as_secs_f64() < RUN_SECONDS {
        let t = started.elapsed().as_secs_f32();
        let cursor_x = VIEWPORT_WIDTH * (0.5 + 0.4 * (t * 0.8).cos());
        let cursor_y = VIEWPORT_HEIGHT * (0.5 + 0.4 * (t * 1.3).sin());
        if let Err(err) = commands::send_cursor(&host_input, cursor_x, cursor_y) {
            warn!("[Host] Dropped cursor update: {err}");
        }

        // One scripted event per second
        let second = t as u32;
        if second != last_event {
            last_event = second;
            let sent = match second % 4 {
                0 => commands::send_rotate(&host_input, RotateDirection::Positive),
                1 => commands::send_scroll(&host_input, 1.0),
                2 => commands::send_rotate(&host_input, RotateDirection::Negative),
                _ => commands::send_scroll(&host_input, -1.0),
            };
            if let Err(err) = sent {
                warn!("[Host] Dropped scripted event: {err}");
            }
            match commands::get_camera_pose(&camera_pose) {
                Ok(pose) => info!("[Host] Frame {} pose {:?}", pose.frame, pose.translation),
                Err(err) => warn!("[Host] {err}"),
            }
        }

        thread::sleep(Duration::from_millis(16));
    }

    info!("[Host] Done");
    Ok(())
}
