//! Animation systems
//!
//! This module moves the demo target around the grid.

use bevy::{prelude::*, time::Time};

use crate::config::demo::{GRID_CELL_SIZE, PATROL_SIDE, STEP_INTERVAL};
use crate::engine::components::GridWalker;

/// Step every walker to its next cell once it has waited long enough
pub fn walk_grid(time: Res<Time>, mut query: Query<(&mut Transform, &mut GridWalker)>) {
    let dt = time.delta_secs();
    for (mut transform, mut walker) in query.iter_mut() {
        walker.dwell += dt;
        if walker.dwell < STEP_INTERVAL {
            continue;
        }
        walker.dwell -= STEP_INTERVAL;
        walker.step = (walker.step + 1) % (PATROL_SIDE * 4);
        let cell = patrol_cell(walker.step, PATROL_SIDE);
        transform.translation.x = cell.x as f32 * GRID_CELL_SIZE;
        transform.translation.z = cell.y as f32 * GRID_CELL_SIZE;
    }
}

/// Cell for a step along the border of a `side` x `side` square, walked
/// counter-clockwise from the origin.
pub fn patrol_cell(step: i32, side: i32) -> IVec2 {
    let step = step.rem_euclid(side * 4);
    let along = step % side;
    match step / side {
        0 => IVec2::new(along, 0),
        1 => IVec2::new(side, along),
        2 => IVec2::new(side - along, side),
        _ => IVec2::new(0, side - along),
    }
}
