//! Tile under the mouse pointer.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Where the pointer is, in world space and on the tile grid. Rewritten every
/// frame by [`cursor_under_mouse`](crate::systems::cursor::cursor_under_mouse);
/// hover and the selection sprite work from `snapped`, which makes hovering a
/// per-tile concept rather than a per-pixel one.
#[derive(Resource, Clone, Copy, Debug)]
pub struct CursorTile {
    /// Raw pointer position projected into world space.
    pub world: Vector2,
    pub tile_x: i32,
    pub tile_y: i32,
    /// World position of the hovered tile's centre.
    pub snapped: Vector2,
}

impl Default for CursorTile {
    fn default() -> Self {
        Self {
            world: Vector2 { x: 0.0, y: 0.0 },
            tile_x: 0,
            tile_y: 0,
            snapped: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}
