//! Configuration constants and settings for the grid camera rig
//!
//! This module contains the default rig parameters, the editor slider ranges,
//! and the timing constants used by the headless demo loop.

/// Fallback viewport width in pixels, used until the host reports a size
pub const VIEWPORT_WIDTH: f32 = 800.0;

/// Fallback viewport height in pixels, used until the host reports a size
pub const VIEWPORT_HEIGHT: f32 = 600.0;

/// Target frames per second for the Bevy update loop
pub const TARGET_FPS: f64 = 60.0;

/// Delay before the host starts feeding input, giving Bevy time to spawn the scene
pub const STARTUP_GRACE_MS: u64 = 1000;

/// Camera rig defaults
pub mod camera {
    /// Additional offset applied once when the rig captures its offset
    pub const ALIGNMENT_OFFSET: [f32; 3] = [0.0, 1.0, 0.0];

    /// Yaw applied per rotate trigger (degrees)
    pub const ROTATE_ANGLE: f32 = 90.0;

    /// Cursor parallax strength
    pub const MOUSE_SENSITIVITY: f32 = 0.0015;

    /// Following speed (position lerp rate per second)
    pub const POSITION_RATE: f32 = 5.0;

    /// Turning speed (rotation slerp rate per second)
    pub const ROTATION_RATE: f32 = 3.0;

    /// Dolly distance per scroll unit
    pub const ZOOM_SENSITIVITY: f32 = 0.5;

    /// Closest allowed distance between camera and target
    pub const MIN_ZOOM: f32 = 5.0;

    /// Farthest allowed distance between camera and target
    pub const MAX_ZOOM: f32 = 20.0;

    /// Pixel-unit scroll deltas are divided by this to get wheel lines
    pub const SCROLL_PIXELS_PER_LINE: f32 = 16.0;
}

/// Editor slider ranges for the rig settings
pub mod ranges {
    use std::ops::RangeInclusive;

    pub const ROTATE_ANGLE: RangeInclusive<f32> = 0.0..=180.0;
    pub const MOUSE_SENSITIVITY: RangeInclusive<f32> = 0.0..=0.004;
    pub const ZOOM_SENSITIVITY: RangeInclusive<f32> = -1.0..=1.0;
    pub const MIN_ZOOM: RangeInclusive<f32> = 1.0..=20.0;
    pub const MAX_ZOOM: RangeInclusive<f32> = 10.0..=40.0;
}

/// Demo scene settings
pub mod demo {
    /// Size of one grid cell in world units
    pub const GRID_CELL_SIZE: f32 = 2.0;

    /// Seconds the walker waits on a cell before stepping to the next one
    pub const STEP_INTERVAL: f32 = 0.75;

    /// Number of cells along each side of the square patrol path
    pub const PATROL_SIDE: i32 = 4;

    /// Initial camera position, placed the way the rig should follow
    pub const CAMERA_START: [f32; 3] = [0.0, 5.0, 10.0];

    /// How long the scripted host drives the demo before exiting (seconds)
    pub const RUN_SECONDS: f64 = 12.0;
}

/// Performance monitoring settings
pub mod performance {
    /// Interval for printing camera pose stats (seconds)
    pub const STATS_PRINT_INTERVAL: f64 = 2.0;

    /// Number of frame timing samples to keep for averaging
    pub const FRAME_TIMING_SAMPLES: usize = 60;
}
