//! Mouse → world → tile picking.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::math::grid::{tile_to_world, world_to_tile};
use crate::resources::camera::Camera2DRes;
use crate::resources::cursor::CursorTile;

/// Project the pointer through the camera inverse and snap it to the grid.
///
/// Runs after the camera update so the projection matches what this frame
/// will render.
pub fn cursor_under_mouse(
    mut cursor: ResMut<CursorTile>,
    camera: Res<Camera2DRes>,
    rl: NonSend<raylib::RaylibHandle>,
) {
    let mouse = rl.get_mouse_position();
    let world = rl.get_screen_to_world2D(mouse, camera.0);

    cursor.world = world;
    cursor.tile_x = world_to_tile(world.x);
    cursor.tile_y = world_to_tile(world.y);
    cursor.snapped = Vector2 {
        x: tile_to_world(cursor.tile_x),
        y: tile_to_world(cursor.tile_y),
    };
}
