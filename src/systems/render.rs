//! Render system.
//!
//! We render inside raylib's drawing scopes and read straight from the ECS
//! world: first the checkerboard tile grid around the player, then every
//! valid non-player entity (with a brightening overdraw when the hovered
//! tile falls inside its bounds), then the player, then the selection sprite
//! on the hovered tile, and finally the debug overlay in screen space.
//!
//! The raylib handle and thread token are taken out of the world for the
//! duration of the frame so the draw handle cannot alias them.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::math::grid::{TILE_WIDTH, tile_to_world, world_to_tile};
use crate::resources::camera::Camera2DRes;
use crate::resources::cursor::CursorTile;
use crate::resources::debugmode::DebugMode;
use crate::resources::entities::{Archetype, EntityStore, PlayerRef};
use crate::resources::fontstore::FontStore;
use crate::resources::fpscounter::FpsCounter;
use crate::resources::sprites::{Sprite, SpriteId, SpriteStore};
use crate::resources::worldtime::WorldTime;

/// Clear colour; the sea the island floats on.
const WATER: Color = Color {
    r: 102,
    g: 179,
    b: 255,
    a: 255,
};

/// Shade of the darker checkerboard cells.
const CHECKER: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 13,
};

/// Hover highlight. Raylib tints multiply and cannot exceed 1.0, so
/// brightening is a translucent white pass over the already-drawn sprite.
const HOVER_TINT: Color = Color {
    r: 255,
    g: 255,
    b: 255,
    a: 89,
};

/// Tiles drawn around the player's tile, per axis.
const TILE_RADIUS_X: i32 = 40;
const TILE_RADIUS_Y: i32 = 30;

/// Draw the whole frame. Exclusive system: runs after simulation and picking.
pub fn render_system(world: &mut World) {
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("raylib handle is inserted at startup");
    let thread = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("raylib thread is inserted at startup");

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(WATER);

        let camera = world.resource::<Camera2DRes>().0;
        {
            let mut d2 = d.begin_mode2D(camera);
            draw_tile_grid(world, &mut d2);
            draw_entities(world, &mut d2);
            draw_selection(world, &mut d2);
        }

        draw_debug_overlay(world, &mut d);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// Checkerboard within a fixed tile radius of the player.
fn draw_tile_grid(world: &World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let store = world.resource::<EntityStore>();
    let player = world.resource::<PlayerRef>().0;
    let player_pos = store
        .get(player)
        .map(|entity| entity.pos)
        .unwrap_or(Vector2 { x: 0.0, y: 0.0 });

    let player_tile_x = world_to_tile(player_pos.x);
    let player_tile_y = world_to_tile(player_pos.y);
    let tile = TILE_WIDTH as f32;
    let half = tile * 0.5;

    for x in (player_tile_x - TILE_RADIUS_X)..(player_tile_x + TILE_RADIUS_X) {
        for y in (player_tile_y - TILE_RADIUS_Y)..(player_tile_y + TILE_RADIUS_Y) {
            if !checker_cell(x, y) {
                continue;
            }
            let corner = Vector2 {
                x: tile_to_world(x) - half,
                y: tile_to_world(y) - half,
            };
            d2.draw_rectangle_v(corner, Vector2 { x: tile, y: tile }, CHECKER);
        }
    }
}

/// Every valid non-player entity in slot order, then the player on top.
fn draw_entities(world: &World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let store = world.resource::<EntityStore>();
    let player = world.resource::<PlayerRef>().0;
    let cursor = *world.resource::<CursorTile>();
    let sprites = world.non_send_resource::<SpriteStore>();
    let half_tile = TILE_WIDTH as f32 * 0.5;

    for (_, entity) in store.iter() {
        if entity.archetype == Archetype::Player {
            continue;
        }
        let sprite = sprites.get(entity.sprite_id);
        // Feet rest on the lower edge of the entity's tile cell
        let anchor = Vector2 {
            x: entity.pos.x,
            y: entity.pos.y + half_tile,
        };
        draw_sprite_bottom_center(d2, sprite, anchor, Color::WHITE);

        let bounds = bottom_center_bounds(entity.pos, sprite.size);
        if contains_point(&bounds, cursor.snapped) {
            draw_sprite_bottom_center(d2, sprite, anchor, HOVER_TINT);
        }
    }

    // The player anchors directly on its position, with no cell offset
    if let Some(entity) = store.get(player) {
        let sprite = sprites.get(entity.sprite_id);
        draw_sprite_bottom_center(d2, sprite, entity.pos, Color::WHITE);
    }
}

/// Selection sprite centred exactly on the hovered tile.
fn draw_selection(world: &World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let cursor = *world.resource::<CursorTile>();
    let sprites = world.non_send_resource::<SpriteStore>();
    let sprite = sprites.get(SpriteId::Select);

    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: sprite.size.x,
        height: sprite.size.y,
    };
    let dest = Rectangle {
        x: cursor.snapped.x,
        y: cursor.snapped.y,
        width: sprite.size.x,
        height: sprite.size.y,
    };
    let origin = Vector2 {
        x: sprite.size.x * 0.5,
        y: sprite.size.y * 0.5,
    };
    d2.draw_texture_pro(&sprite.texture, src, dest, origin, 0.0, Color::WHITE);
}

/// Diagnostics in screen space, gated on the [`DebugMode`] marker.
fn draw_debug_overlay(world: &World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let fonts = world.non_send_resource::<FontStore>();
    let Some(font) = fonts.get("debug") else {
        return;
    };

    let fps = *world.resource::<FpsCounter>();
    let time = *world.resource::<WorldTime>();
    let camera = world.resource::<Camera2DRes>().0;
    let cursor = *world.resource::<CursorTile>();

    let text = format!(
        "fps: {} | t: {:.1}s | camera ({:.1}, {:.1}) zoom {:.2}\nmouse world ({:.1}, {:.1}) tile ({}, {})",
        fps.last,
        time.elapsed,
        camera.target.x,
        camera.target.y,
        camera.zoom,
        cursor.world.x,
        cursor.world.y,
        cursor.tile_x,
        cursor.tile_y,
    );
    d.draw_text_ex(
        font,
        &text,
        Vector2 { x: 10.0, y: 10.0 },
        20.0,
        1.0,
        Color::BLACK,
    );
}

/// Sprite whose bottom-center pivot sits at `anchor`, drawn 1:1 in world
/// units.
fn draw_sprite_bottom_center(
    d2: &mut RaylibMode2D<RaylibDrawHandle>,
    sprite: &Sprite,
    anchor: Vector2,
    tint: Color,
) {
    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: sprite.size.x,
        height: sprite.size.y,
    };
    let dest = Rectangle {
        x: anchor.x,
        y: anchor.y,
        width: sprite.size.x,
        height: sprite.size.y,
    };
    let origin = Vector2 {
        x: sprite.size.x * 0.5,
        y: sprite.size.y,
    };
    d2.draw_texture_pro(&sprite.texture, src, dest, origin, 0.0, tint);
}

/// Checkerboard predicate; offsetting even rows keeps the pattern alternating
/// on both axes.
fn checker_cell(x: i32, y: i32) -> bool {
    (x + (y % 2 == 0) as i32) % 2 == 0
}

/// World-space box of a sprite whose bottom-center anchor sits at `pos`.
fn bottom_center_bounds(pos: Vector2, size: Vector2) -> Rectangle {
    Rectangle {
        x: pos.x - size.x * 0.5,
        y: pos.y - size.y,
        width: size.x,
        height: size.y,
    }
}

/// Inclusive containment, so a point on the edge still counts as hovered.
fn contains_point(bounds: &Rectangle, point: Vector2) -> bool {
    point.x >= bounds.x
        && point.x <= bounds.x + bounds.width
        && point.y >= bounds.y
        && point.y <= bounds.y + bounds.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_alternates_along_each_row() {
        for y in -3..3 {
            for x in -3..3 {
                assert_ne!(checker_cell(x, y), checker_cell(x + 1, y));
            }
        }
    }

    #[test]
    fn checkerboard_alternates_between_rows() {
        for y in -3..3 {
            for x in -3..3 {
                assert_ne!(checker_cell(x, y), checker_cell(x, y + 1));
            }
        }
    }

    #[test]
    fn bounds_hang_above_the_anchor() {
        let bounds = bottom_center_bounds(Vector2 { x: 10.0, y: 20.0 }, Vector2 { x: 6.0, y: 8.0 });
        assert_eq!(bounds.x, 7.0);
        assert_eq!(bounds.y, 12.0);
        assert_eq!(bounds.width, 6.0);
        assert_eq!(bounds.height, 8.0);
    }

    #[test]
    fn containment_is_inclusive_at_the_edges() {
        let bounds = Rectangle {
            x: 0.0,
            y: 0.0,
            width: 6.0,
            height: 6.0,
        };
        assert!(contains_point(&bounds, Vector2 { x: 0.0, y: 0.0 }));
        assert!(contains_point(&bounds, Vector2 { x: 6.0, y: 6.0 }));
        assert!(contains_point(&bounds, Vector2 { x: 3.0, y: 3.0 }));
        assert!(!contains_point(&bounds, Vector2 { x: 6.1, y: 3.0 }));
        assert!(!contains_point(&bounds, Vector2 { x: 3.0, y: -0.1 }));
    }
}
