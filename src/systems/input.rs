//! Input polling system.
//!
//! [`update_input_state`] reads hardware input from raylib each frame and
//! writes the results into [`crate::resources::input::InputState`]. Key
//! edges fire observer events: Escape requests quit, F11 toggles fullscreen,
//! F10 toggles the debug overlay. Each fires once per press, not while held.

use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::quit::QuitEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::events::switchfullscreen::SwitchFullScreenEvent;
use crate::resources::input::InputState;

/// Poll raylib for keyboard and wheel input and update the `InputState`
/// resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);
    let is_key_pressed = |key: KeyboardKey| rl.is_key_pressed(key);

    // Held state drives movement
    input.move_up.active = is_key_down(input.move_up.key_binding);
    input.move_left.active = is_key_down(input.move_left.key_binding);
    input.move_down.active = is_key_down(input.move_down.key_binding);
    input.move_right.active = is_key_down(input.move_right.key_binding);

    // Edge-triggered actions fire one event per press
    input.action_quit.just_pressed = is_key_pressed(input.action_quit.key_binding);
    if input.action_quit.just_pressed {
        commands.trigger(QuitEvent {});
    }

    input.fullscreen_toggle.just_pressed = is_key_pressed(input.fullscreen_toggle.key_binding);
    if input.fullscreen_toggle.just_pressed {
        commands.trigger(SwitchFullScreenEvent {});
    }

    input.mode_debug.just_pressed = is_key_pressed(input.mode_debug.key_binding);
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    // Wheel motion accumulates until the camera consumes it
    input.scroll += rl.get_mouse_wheel_move();
}
