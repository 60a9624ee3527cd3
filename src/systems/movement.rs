//! Player movement.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::resources::entities::{EntityStore, PlayerRef};
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// World units per second the player walks.
pub const PLAYER_SPEED: f32 = 50.0;

/// Build a movement axis from the held direction keys and advance the player
/// by `axis * PLAYER_SPEED * dt`.
pub fn player_movement(
    mut store: ResMut<EntityStore>,
    player: Res<PlayerRef>,
    input: Res<InputState>,
    time: Res<WorldTime>,
) {
    let mut axis = Vector2 { x: 0.0, y: 0.0 };
    if input.move_left.active {
        axis.x -= 1.0;
    }
    if input.move_right.active {
        axis.x += 1.0;
    }
    if input.move_up.active {
        axis.y -= 1.0;
    }
    if input.move_down.active {
        axis.y += 1.0;
    }

    // A zero axis stays zero; normalizing it would divide by zero
    let length = (axis.x * axis.x + axis.y * axis.y).sqrt();
    if length > 0.0 {
        axis.x /= length;
        axis.y /= length;
    }

    if let Some(entity) = store.get_mut(player.0) {
        entity.pos = entity.pos + axis.scale_by(PLAYER_SPEED * time.delta);
    }
}
