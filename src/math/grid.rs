//! Tile grid conversions.
//!
//! World coordinates are continuous floats; the grid is discrete with
//! [`TILE_WIDTH`]-unit cells. A tile's centre sits at `tile * TILE_WIDTH` on
//! each axis, so conversion round-trips exactly for tile-aligned coordinates.

use raylib::prelude::Vector2;

/// Width of a grid cell in world units.
pub const TILE_WIDTH: i32 = 6;

/// Nearest tile for a world coordinate; ties round away from zero.
pub fn world_to_tile(world: f32) -> i32 {
    (world / TILE_WIDTH as f32).round() as i32
}

/// World coordinate of a tile's centre.
pub fn tile_to_world(tile: i32) -> f32 {
    (tile * TILE_WIDTH) as f32
}

/// Snap both axes of a world position to the nearest tile centre.
pub fn snap_to_tile(pos: Vector2) -> Vector2 {
    Vector2 {
        x: tile_to_world(world_to_tile(pos.x)),
        y: tile_to_world(world_to_tile(pos.y)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_is_stable_for_aligned_coordinates() {
        for tile in -100..=100 {
            let world = tile_to_world(tile);
            assert_eq!(world_to_tile(world), tile);
            assert_eq!(tile_to_world(world_to_tile(world)), world);
        }
    }

    #[test]
    fn nearest_tile_is_within_half_a_cell() {
        let mut world = -50.0f32;
        while world < 50.0 {
            let snapped = tile_to_world(world_to_tile(world));
            assert!((snapped - world).abs() <= TILE_WIDTH as f32 * 0.5);
            world += 0.37;
        }
    }

    #[test]
    fn halfway_rounds_away_from_zero() {
        // 9 / 6 = 1.5
        assert_eq!(world_to_tile(0.0), 0);
        assert_eq!(world_to_tile(9.0), 2);
        assert_eq!(world_to_tile(-9.0), -2);

        let snapped = snap_to_tile(Vector2 { x: 9.0, y: 9.0 });
        assert_eq!(snapped.x, 12.0);
        assert_eq!(snapped.y, 12.0);
    }
}
