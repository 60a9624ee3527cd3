//! Camera controller system.

use bevy_ecs::prelude::*;
use raylib::prelude::{Camera2D, Vector2};

use crate::math::animate::animate_vec2_to_target;
use crate::resources::camera::{CAMERA_FOLLOW_RATE, Camera2DRes, CameraRig, ZOOM_SCROLL_RATE};
use crate::resources::entities::{EntityStore, PlayerRef};
use crate::resources::input::InputState;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;

/// Integrate wheel scroll into zoom, glide toward the player, and rebuild the
/// raylib camera from the live window size.
pub fn camera_system(
    mut rig: ResMut<CameraRig>,
    mut camera: ResMut<Camera2DRes>,
    mut input: ResMut<InputState>,
    store: Res<EntityStore>,
    player: Res<PlayerRef>,
    window: Res<WindowSize>,
    time: Res<WorldTime>,
) {
    // Scroll is consumed here and only here; zeroing it right after the read
    // applies each frame's contribution exactly once.
    rig.zoom += input.scroll * ZOOM_SCROLL_RATE * time.delta;
    input.scroll = 0.0;

    if let Some(target) = store.get(player.0) {
        let target_pos = target.pos;
        animate_vec2_to_target(&mut rig.pos, target_pos, time.delta, CAMERA_FOLLOW_RATE);
    }

    camera.0 = Camera2D {
        target: rig.pos,
        offset: Vector2 {
            x: window.w as f32 * 0.5,
            y: window.h as f32 * 0.5,
        },
        rotation: 0.0,
        zoom: rig.zoom,
    };
}
