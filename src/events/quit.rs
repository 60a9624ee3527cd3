//! Quit request event and observer.
//!
//! Pressing **Escape** triggers [`QuitEvent`]; [`quit_observer`] inserts the
//! [`QuitRequested`] marker, which the main loop checks between ticks. The
//! loop never exits mid-tick.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::quit::QuitRequested;

/// Event fired by the input system when the quit key is pressed.
#[derive(Event, Debug, Clone, Copy)]
pub struct QuitEvent {}

/// Observer that marks the world for shutdown.
pub fn quit_observer(_trigger: On<QuitEvent>, mut commands: Commands) {
    info!("quit requested");
    commands.insert_resource(QuitRequested {});
}
