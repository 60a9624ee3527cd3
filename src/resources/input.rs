//! Per-frame keyboard and wheel input resource.
//!
//! Captures the subset of raylib input the game cares about and exposes it to
//! systems via the [`InputState`] resource. WASD walks the player, Escape
//! requests quit, F11 toggles fullscreen, F10 toggles the debug overlay.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding: key,
        }
    }
}

/// Resource capturing the per-frame input state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_up: BoolState,
    pub move_left: BoolState,
    pub move_down: BoolState,
    pub move_right: BoolState,
    // Action keys, edge-triggered
    pub action_quit: BoolState,
    pub fullscreen_toggle: BoolState,
    pub mode_debug: BoolState,
    /// Wheel scroll accumulated since the camera last consumed it.
    pub scroll: f32,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_up: BoolState::bound_to(KeyboardKey::KEY_W),
            move_left: BoolState::bound_to(KeyboardKey::KEY_A),
            move_down: BoolState::bound_to(KeyboardKey::KEY_S),
            move_right: BoolState::bound_to(KeyboardKey::KEY_D),
            action_quit: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            fullscreen_toggle: BoolState::bound_to(KeyboardKey::KEY_F11),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F10),
            scroll: 0.0,
        }
    }
}
