//! Camera resources.
//!
//! [`CameraRig`] is the game's own pan/zoom state: the position glides after
//! the followed entity, the zoom integrates wheel scroll. The raylib
//! [`Camera2D`] handed to the renderer is derived from the rig every frame by
//! [`camera_system`](crate::systems::camera::camera_system) so the view
//! always reflects the current window size.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// How quickly the camera position converges on its target, per second.
pub const CAMERA_FOLLOW_RATE: f32 = 10.0;
/// Wheel-to-zoom integration rate.
pub const ZOOM_SCROLL_RATE: f32 = 100.0;

const START_ZOOM: f32 = 5.3;

/// Smooth-follow pan/zoom state, mutated once per frame.
#[derive(Resource, Clone, Copy, Debug)]
pub struct CameraRig {
    pub pos: Vector2,
    pub zoom: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
            zoom: START_ZOOM,
        }
    }
}

/// ECS resource that holds the active 2D camera parameters.
///
/// Rebuilt from the [`CameraRig`] each frame, read by the render and
/// cursor-picking systems.
#[derive(Resource)]
pub struct Camera2DRes(pub Camera2D);
