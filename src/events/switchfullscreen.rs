//! Fullscreen toggle event and observer.
//!
//! Pressing **F11** triggers [`SwitchFullScreenEvent`], which is handled by
//! [`switch_fullscreen_observer`]. The observer toggles the window between
//! fullscreen and windowed mode, using the [`FullScreen`] marker resource to
//! track the current state.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::fullscreen::FullScreen;
use crate::resources::gameconfig::GameConfig;

/// Event triggered to toggle fullscreen mode.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchFullScreenEvent {}

/// Observer that toggles fullscreen mode when [`SwitchFullScreenEvent`] fires.
///
/// - If [`FullScreen`] is present: removes it and restores the configured
///   window size.
/// - If absent: inserts it and enters fullscreen at the monitor size.
pub fn switch_fullscreen_observer(
    _trigger: On<SwitchFullScreenEvent>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
    fullscreen: Option<Res<FullScreen>>,
    config: Res<GameConfig>,
) {
    if fullscreen.is_some() {
        commands.remove_resource::<FullScreen>();

        if rl.is_window_fullscreen() {
            rl.toggle_fullscreen();
            let (w, h) = config.window_size();
            rl.set_window_size(w as i32, h as i32);
            rl.restore_window();
        }
        info!("fullscreen disabled");
    } else {
        commands.insert_resource(FullScreen {});

        if !rl.is_window_fullscreen() {
            rl.maximize_window();
            rl.toggle_fullscreen();
        }
        info!("fullscreen enabled");
    }
}
