//! Frame tick integration tests for movement, camera, and the entity store.

use bevy_ecs::prelude::*;
use raylib::prelude::{Camera2D, Vector2};

use islander::math::grid::{snap_to_tile, tile_to_world, world_to_tile};
use islander::resources::camera::{Camera2DRes, CameraRig};
use islander::resources::entities::{EntityStore, PlayerRef};
use islander::resources::input::InputState;
use islander::resources::windowsize::WindowSize;
use islander::resources::worldtime::WorldTime;
use islander::systems::camera::camera_system;
use islander::systems::movement::{PLAYER_SPEED, player_movement};
use islander::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(WindowSize { w: 1280, h: 720 });

    let rig = CameraRig::default();
    world.insert_resource(Camera2DRes(Camera2D {
        target: rig.pos,
        offset: Vector2 { x: 640.0, y: 360.0 },
        rotation: 0.0,
        zoom: rig.zoom,
    }));
    world.insert_resource(rig);

    let mut store = EntityStore::new();
    let player = store.spawn_player();
    world.insert_resource(store);
    world.insert_resource(PlayerRef(player));
    world
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_movement);
    schedule.run(world);
}

fn tick_camera(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(camera_system);
    schedule.run(world);
}

fn player_pos(world: &mut World) -> Vector2 {
    let player = world.resource::<PlayerRef>().0;
    world
        .resource::<EntityStore>()
        .get(player)
        .expect("player is never released")
        .pos
}

#[test]
fn held_keys_move_the_player_diagonally() {
    let mut world = make_world();
    {
        let mut input = world.resource_mut::<InputState>();
        input.move_right.active = true;
        input.move_down.active = true;
    }

    update_world_time(&mut world, 1.0);
    tick_movement(&mut world);

    let expected = PLAYER_SPEED / 2.0f32.sqrt();
    let pos = player_pos(&mut world);
    assert!(approx_eq(pos.x, expected));
    assert!(approx_eq(pos.y, expected));
}

#[test]
fn no_keys_means_no_movement() {
    let mut world = make_world();

    update_world_time(&mut world, 1.0);
    tick_movement(&mut world);

    let pos = player_pos(&mut world);
    assert_eq!(pos.x, 0.0);
    assert_eq!(pos.y, 0.0);
}

#[test]
fn opposing_keys_cancel_out() {
    let mut world = make_world();
    {
        let mut input = world.resource_mut::<InputState>();
        input.move_left.active = true;
        input.move_right.active = true;
    }

    update_world_time(&mut world, 1.0);
    tick_movement(&mut world);

    let pos = player_pos(&mut world);
    assert_eq!(pos.x, 0.0);
    assert_eq!(pos.y, 0.0);
}

#[test]
fn scroll_integrates_into_zoom_once() {
    let mut world = make_world();
    world.resource_mut::<InputState>().scroll = 2.0;

    // zoom = 5.3 + 2 * 100 * 0.1
    update_world_time(&mut world, 0.1);
    tick_camera(&mut world);
    assert!(approx_eq(world.resource::<CameraRig>().zoom, 25.3));
    assert_eq!(world.resource::<InputState>().scroll, 0.0);

    // the consumed scroll must not contribute a second time
    tick_camera(&mut world);
    assert!(approx_eq(world.resource::<CameraRig>().zoom, 25.3));
}

#[test]
fn camera_glides_toward_the_player() {
    let mut world = make_world();
    let player = world.resource::<PlayerRef>().0;
    world
        .resource_mut::<EntityStore>()
        .get_mut(player)
        .unwrap()
        .pos = Vector2 { x: 100.0, y: 0.0 };

    update_world_time(&mut world, 1.0);
    tick_camera(&mut world);

    // 100 * (1 - 2^-10): close, but not yet snapped onto the target
    let rig = *world.resource::<CameraRig>();
    assert!((rig.pos.x - 99.902).abs() < 1e-2);
    assert!(rig.pos.x != 100.0);
    assert_eq!(rig.pos.y, 0.0);
}

#[test]
fn camera_eventually_lands_exactly_on_the_player() {
    let mut world = make_world();
    let player = world.resource::<PlayerRef>().0;
    world
        .resource_mut::<EntityStore>()
        .get_mut(player)
        .unwrap()
        .pos = Vector2 { x: 100.0, y: 50.0 };

    for _ in 0..300 {
        update_world_time(&mut world, 0.1);
        tick_camera(&mut world);
    }

    let rig = *world.resource::<CameraRig>();
    assert_eq!(rig.pos.x, 100.0);
    assert_eq!(rig.pos.y, 50.0);
}

#[test]
fn camera_view_derives_from_window_size() {
    let mut world = make_world();
    world.insert_resource(WindowSize { w: 800, h: 600 });

    update_world_time(&mut world, 0.016);
    tick_camera(&mut world);

    let camera = world.resource::<Camera2DRes>().0;
    assert_eq!(camera.offset.x, 400.0);
    assert_eq!(camera.offset.y, 300.0);
    assert_eq!(camera.zoom, world.resource::<CameraRig>().zoom);
    assert_eq!(camera.rotation, 0.0);
}

#[test]
fn island_scenario_yields_twenty_seven_entities() {
    let mut store = EntityStore::new();
    store.spawn_player();
    for _ in 0..16 {
        store.spawn_raft_tile();
    }
    for _ in 0..10 {
        store.spawn_rock();
    }
    assert_eq!(store.iter().count(), 27);
}

#[test]
fn released_slots_are_reused_and_emptied() {
    let mut store = EntityStore::new();
    let _player = store.spawn_player();
    let rock = store.spawn_rock();
    store.release(rock);
    let replacement = store.spawn_rock();
    assert_eq!(replacement, rock);

    let refs: Vec<_> = store.iter().map(|(entity_ref, _)| entity_ref).collect();
    for entity_ref in refs {
        store.release(entity_ref);
    }
    assert_eq!(store.iter().count(), 0);
}

#[test]
fn mouse_tile_mapping_scenario() {
    // mouse world (9, 9): 9/6 = 1.5 rounds to tile 2, whose centre is at 12
    assert_eq!(world_to_tile(0.0), 0);
    assert_eq!(world_to_tile(9.0), 2);
    assert_eq!(tile_to_world(2), 12.0);

    let snapped = snap_to_tile(Vector2 { x: 9.0, y: 9.0 });
    assert_eq!(snapped.x, 12.0);
    assert_eq!(snapped.y, 12.0);
}
