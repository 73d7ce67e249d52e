//! Drives the grid camera plugin through a Bevy `App`, one `update()` per frame.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::{TimePlugin, TimeUpdateStrategy};

use grid_camera_rig::bridge::{commands, SharedHostInput};
use grid_camera_rig::engine::resources::SharedInputRes;
use grid_camera_rig::engine::{GridCamera, GridCameraPlugin, GridCameraSystems};
use grid_camera_rig::rig::{RigSettings, RotateDirection};

/// App with the rig plugin and a clock that never advances.
fn frozen_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>();
    app.add_plugins(GridCameraPlugin);
    app
}

/// App with the rig plugin and a clock that advances `step` per update.
fn ticking_app(step: Duration) -> App {
    let mut app = App::new();
    app.add_plugins(TimePlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
    app.add_plugins(GridCameraPlugin);
    app
}

fn spawn_rig(app: &mut App, settings: RigSettings) -> (Entity, Entity) {
    let target = app.world_mut().spawn(Transform::from_xyz(0.0, 0.0, 0.0)).id();
    let camera = app
        .world_mut()
        .spawn((
            Transform::from_xyz(0.0, 4.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
            GridCamera::new(settings).with_target(target),
        ))
        .id();
    (target, camera)
}

fn offset_of(app: &App, camera: Entity) -> Vec3 {
    app.world()
        .get::<GridCamera>(camera)
        .and_then(|camera| camera.rig().offset())
        .expect("rig initialized")
}

fn transform_of(app: &App, entity: Entity) -> Transform {
    *app.world().get::<Transform>(entity).expect("transform")
}

#[test]
fn captures_offset_on_first_frame() {
    let mut app = frozen_app();
    let (_, camera) = spawn_rig(&mut app, RigSettings::default());
    app.update();
    assert_eq!(offset_of(&app, camera), Vec3::new(0.0, -3.0, -10.0));
}

#[test]
fn offset_captured_before_target_moves() {
    let mut app = frozen_app();
    let (target, camera) = spawn_rig(&mut app, RigSettings::default());
    app.add_systems(
        Update,
        (move |mut transforms: Query<&mut Transform, Without<GridCamera>>| {
            if let Ok(mut transform) = transforms.get_mut(target) {
                transform.translation.x += 5.0;
            }
        })
        .before(GridCameraSystems::Input),
    );
    app.update();
    assert_eq!(offset_of(&app, camera), Vec3::new(0.0, -3.0, -10.0));
}

#[test]
#[should_panic]
fn missing_target_fails_fast() {
    let mut app = frozen_app();
    app.world_mut().spawn((
        Transform::from_xyz(0.0, 4.0, 10.0),
        GridCamera::new(RigSettings::default()),
    ));
    app.update();
}

#[test]
fn zero_delta_keeps_camera_still() {
    let mut app = frozen_app();
    let (_, camera) = spawn_rig(&mut app, RigSettings::default());
    let before = transform_of(&app, camera);
    app.update();
    app.update();
    let after = transform_of(&app, camera);
    assert_eq!(after.translation, before.translation);
    assert!(after.rotation.abs_diff_eq(before.rotation, 1e-5));
}

#[test]
fn rotate_keys_fire_once_per_press() {
    let mut app = frozen_app();
    app.init_resource::<ButtonInput<KeyCode>>();
    let (_, camera) = spawn_rig(&mut app, RigSettings::default());
    app.update();
    let start = offset_of(&app, camera);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyQ);
    app.update();
    let turned = offset_of(&app, camera);
    assert!(turned.abs_diff_eq(Vec3::new(-10.0, -3.0, 0.0), 1e-4));

    // Still held, not pressed again: no further turn.
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
    app.update();
    assert!(offset_of(&app, camera).abs_diff_eq(turned, 1e-6));

    {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release(KeyCode::KeyQ);
        keys.press(KeyCode::KeyE);
    }
    app.update();
    assert!(offset_of(&app, camera).abs_diff_eq(start, 1e-4));
}

#[test]
fn bridge_scroll_zooms_in_and_is_consumed() {
    let mut app = frozen_app();
    let shared = SharedHostInput::default();
    app.insert_resource(SharedInputRes(shared.clone()));
    let (_, camera) = spawn_rig(&mut app, RigSettings::default());
    app.update();
    let before = offset_of(&app, camera);

    commands::send_scroll(&shared, 1.0).unwrap();
    app.update();
    let after = offset_of(&app, camera);
    assert!(after.length() < before.length());
    assert!(after.length() > RigSettings::default().min_zoom());
    assert_eq!(shared.0.lock().unwrap().scroll_delta, 0.0);

    // Nothing pending: offset stays put.
    app.update();
    assert_eq!(offset_of(&app, camera), after);
}

#[test]
fn bridge_rotations_cancel_out() {
    let mut app = frozen_app();
    let shared = SharedHostInput::default();
    app.insert_resource(SharedInputRes(shared.clone()));
    let (_, camera) = spawn_rig(&mut app, RigSettings::default());
    app.update();
    let start = offset_of(&app, camera);

    commands::send_rotate(&shared, RotateDirection::Positive).unwrap();
    app.update();
    commands::send_rotate(&shared, RotateDirection::Negative).unwrap();
    app.update();
    assert!(offset_of(&app, camera).abs_diff_eq(start, 1e-4));
}

#[test]
fn cursor_off_centre_adds_parallax() {
    let mut app = frozen_app();
    let shared = SharedHostInput::default();
    app.insert_resource(SharedInputRes(shared.clone()));
    let (_, camera) = spawn_rig(&mut app, RigSettings::default());
    app.update();
    let parallax = |app: &App| app.world().get::<GridCamera>(camera).unwrap().rig().parallax();
    assert_eq!(parallax(&app), Vec3::ZERO);

    commands::send_cursor(&shared, 700.0, 300.0).unwrap();
    app.update();
    assert!(parallax(&app).length() > 0.0);

    commands::send_cursor(&shared, 400.0, 300.0).unwrap();
    app.update();
    assert_eq!(parallax(&app), Vec3::ZERO);
}

#[test]
fn camera_tracks_target_moved_in_the_same_frame() {
    let mut settings = RigSettings::default();
    settings.set_position_rate(1000.0);
    settings.clamp_interpolation = true;

    let mut app = ticking_app(Duration::from_millis(100));
    let (target, camera) = spawn_rig(&mut app, settings);
    app.add_systems(
        Update,
        move |mut transforms: Query<&mut Transform, Without<GridCamera>>| {
            if let Ok(mut transform) = transforms.get_mut(target) {
                transform.translation.x += 1.0;
            }
        },
    );

    for _ in 0..3 {
        app.update();
    }
    let offset = offset_of(&app, camera);
    let target_now = transform_of(&app, target).translation;
    let camera_now = transform_of(&app, camera).translation;
    assert!(camera_now.abs_diff_eq(target_now - offset, 1e-4));
}

#[test]
fn rebinding_target_keeps_offset() {
    let mut settings = RigSettings::default();
    settings.set_position_rate(1000.0);
    settings.clamp_interpolation = true;

    let mut app = ticking_app(Duration::from_millis(100));
    let (_, camera) = spawn_rig(&mut app, settings);
    app.update();
    let offset = offset_of(&app, camera);

    let other = app.world_mut().spawn(Transform::from_xyz(10.0, 0.0, 0.0)).id();
    app.world_mut()
        .get_mut::<GridCamera>(camera)
        .unwrap()
        .set_target(other);
    app.update();
    app.update();

    assert_eq!(offset_of(&app, camera), offset);
    let camera_now = transform_of(&app, camera).translation;
    assert!(camera_now.abs_diff_eq(Vec3::new(10.0, 0.0, 0.0) - offset, 1e-4));
}

#[test]
fn despawned_target_holds_pose() {
    let mut app = ticking_app(Duration::from_millis(100));
    let (target, camera) = spawn_rig(&mut app, RigSettings::default());
    app.update();
    app.world_mut().despawn(target);
    let before = transform_of(&app, camera);
    app.update();
    assert_eq!(transform_of(&app, camera), before);
}

#[test]
fn host_systems_can_feed_the_gather_set() {
    let mut app = frozen_app();
    let (_, camera) = spawn_rig(&mut app, RigSettings::default());
    app.add_systems(
        Update,
        (|mut input: ResMut<grid_camera_rig::engine::resources::RigFrameInput>| {
            input.0.rotate_positive += 1;
        })
        .in_set(GridCameraSystems::Gather),
    );
    app.update();
    // Captured and turned a quarter within the same frame.
    assert!(offset_of(&app, camera).abs_diff_eq(Vec3::new(-10.0, -3.0, 0.0), 1e-4));
}
