//! Startup island population.

use raylib::prelude::Vector2;

use crate::math::grid::snap_to_tile;
use crate::resources::entities::{EntityRef, EntityStore};

const RAFT_SIDE: i32 = 4;
const RAFT_SPACING: f32 = 30.0;
const ROCK_COUNT: usize = 10;
const ROCK_SCATTER: f32 = 200.0;

/// Spawn the fixed starting population: the player at the origin, a 4×4 raft
/// of raft tiles, and rocks scattered around the island and snapped onto the
/// grid. Returns the player's ref, which stays valid for the whole run.
pub fn populate_island(store: &mut EntityStore) -> EntityRef {
    let player = store.spawn_player();

    for y in 0..RAFT_SIDE {
        for x in 0..RAFT_SIDE {
            let raft = store.spawn_raft_tile();
            if let Some(entity) = store.get_mut(raft) {
                entity.pos = Vector2 {
                    x: x as f32 * RAFT_SPACING,
                    y: y as f32 * RAFT_SPACING,
                };
            }
        }
    }

    for _ in 0..ROCK_COUNT {
        let rock = store.spawn_rock();
        let scatter = Vector2 {
            x: -ROCK_SCATTER + fastrand::f32() * (ROCK_SCATTER * 2.0),
            y: -ROCK_SCATTER + fastrand::f32() * (ROCK_SCATTER * 2.0),
        };
        if let Some(entity) = store.get_mut(rock) {
            entity.pos = snap_to_tile(scatter);
        }
    }

    player
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::grid::TILE_WIDTH;
    use crate::resources::entities::Archetype;

    #[test]
    fn island_population_is_twenty_seven() {
        let mut store = EntityStore::new();
        let player = populate_island(&mut store);
        assert_eq!(store.iter().count(), 27);
        assert_eq!(store.get(player).unwrap().archetype, Archetype::Player);
    }

    #[test]
    fn rocks_land_on_tile_centres() {
        let mut store = EntityStore::new();
        populate_island(&mut store);
        for (_, entity) in store.iter() {
            if entity.archetype == Archetype::Rock {
                assert_eq!(entity.pos.x % TILE_WIDTH as f32, 0.0);
                assert_eq!(entity.pos.y % TILE_WIDTH as f32, 0.0);
            }
        }
    }
}
