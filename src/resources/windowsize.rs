//! Window size resource.
//!
//! Tracks the OS window dimensions in pixels, updated each frame so resizes
//! and fullscreen toggles feed straight into the camera's view.

use bevy_ecs::prelude::Resource;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
