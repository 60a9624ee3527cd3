//! Quit request marker resource.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the main loop exits between ticks.
#[derive(Resource, Clone, Copy)]
pub struct QuitRequested {}
