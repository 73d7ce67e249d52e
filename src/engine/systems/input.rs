//! Input gathering systems
//!
//! This module assembles the rig's per-frame input from Bevy's own input
//! resources and from the host bridge.

use bevy::{
    input::mouse::{AccumulatedMouseScroll, MouseScrollUnit},
    prelude::*,
};

use crate::config::camera::SCROLL_PIXELS_PER_LINE;
use crate::engine::resources::{RigFrameInput, RigKeyBindings, SharedInputRes, ViewportSize};
use crate::rig::FrameInput;

/// Reset the one-shot parts of the frame input. The cursor is a position, so
/// it carries over until a source reports a new one.
pub fn begin_frame_input(mut input: ResMut<RigFrameInput>, viewport: Res<ViewportSize>) {
    input.0 = FrameInput {
        cursor: input.0.cursor,
        ..FrameInput::idle(viewport.0)
    };
}

/// Read rotate keys and the scroll wheel from Bevy's input resources
///
/// Both resources are optional so the rig also runs in headless apps without
/// `InputPlugin`.
pub fn gather_device_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    scroll: Option<Res<AccumulatedMouseScroll>>,
    bindings: Res<RigKeyBindings>,
    mut input: ResMut<RigFrameInput>,
) {
    if let Some(keys) = keys {
        if keys.just_pressed(bindings.rotate_positive) {
            input.0.rotate_positive += 1;
        }
        if keys.just_pressed(bindings.rotate_negative) {
            input.0.rotate_negative += 1;
        }
    }

    if let Some(scroll) = scroll {
        input.0.scroll_delta += match scroll.unit {
            MouseScrollUnit::Line => scroll.delta.y,
            MouseScrollUnit::Pixel => scroll.delta.y / SCROLL_PIXELS_PER_LINE,
        };
    }
}

/// Read and clear input accumulated by the host bridge
pub fn gather_bridge_input(
    shared: Option<Res<SharedInputRes>>,
    mut viewport: ResMut<ViewportSize>,
    mut input: ResMut<RigFrameInput>,
) {
    let Some(shared) = shared else {
        return;
    };

    let host = {
        let mut guard = match shared.0 .0.lock() {
            Ok(g) => g,
            Err(_) => return,
        };
        let host = guard.clone();
        guard.clear_accumulated();
        host
    };

    let screen_size = Vec2::new(host.viewport_width, host.viewport_height);
    if screen_size != viewport.0 {
        debug!("[Rig] Viewport resized to {}x{}", screen_size.x, screen_size.y);
        viewport.0 = screen_size;
    }

    let frame = &mut input.0;
    frame.screen_size = screen_size;
    frame.cursor = Vec2::new(host.cursor_x, host.cursor_y);
    frame.scroll_delta += host.scroll_delta;
    frame.rotate_positive += host.rotate_positive;
    frame.rotate_negative += host.rotate_negative;
}
