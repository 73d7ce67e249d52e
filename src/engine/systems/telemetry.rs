//! Camera pose telemetry
//!
//! Publishes the integrated camera pose to the host and prints a short
//! report at a fixed interval.

use bevy::{prelude::*, time::Time};

use crate::bridge::CameraPose;
use crate::config::performance::*;
use crate::engine::components::GridCamera;
use crate::engine::resources::{FrameCount, FrameTimings, SharedPoseRes};

/// Publish the first grid camera's pose and log periodic stats
pub fn publish_camera_pose(
    pose_res: Option<Res<SharedPoseRes>>,
    cameras: Query<(&GridCamera, &Transform)>,
    mut count: ResMut<FrameCount>,
    mut timings: ResMut<FrameTimings>,
    time: Res<Time>,
) {
    let Some((camera, transform)) = cameras.iter().next() else {
        return;
    };
    count.0 += 1;

    timings.frame_times.push(time.delta_secs_f64() * 1000.0);
    // Keep only last N samples for averaging
    if timings.frame_times.len() > FRAME_TIMING_SAMPLES {
        timings.frame_times.remove(0);
    }

    let pose = CameraPose {
        translation: transform.translation.to_array(),
        rotation: transform.rotation.to_array(),
        offset: camera.rig().offset().map(|offset| offset.to_array()),
        frame: count.0,
    };

    if let Some(pose_res) = &pose_res {
        if let Ok(mut guard) = pose_res.0 .0.lock() {
            *guard = Some(pose);
        }
    }

    // Print stats periodically
    let current_time = time.elapsed_secs_f64();
    if current_time - timings.last_print_time >= STATS_PRINT_INTERVAL {
        let avg_time = timings.frame_times.iter().sum::<f64>() / timings.frame_times.len() as f64;
        let distance = camera.rig().offset().map_or(0.0, |offset| offset.length());
        info!(
            "[Rig] Frame {} | Camera {:.2} | Distance {:.2} | Parallax {:.3} | Avg frame: {:.2}ms",
            count.0,
            transform.translation,
            distance,
            camera.rig().parallax(),
            avg_time,
        );
        timings.last_print_time = current_time;
    }
}
