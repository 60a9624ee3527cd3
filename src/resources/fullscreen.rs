//! Full screen toggle resource.
//!
//! The mere presence of this resource indicates that the window is running in
//! full screen mode.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the application runs in full screen mode.
#[derive(Resource, Clone, Copy)]
pub struct FullScreen {}
