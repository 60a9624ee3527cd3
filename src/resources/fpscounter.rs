//! Frames-per-second accumulator.

use bevy_ecs::prelude::Resource;

/// Accumulates frames and elapsed time; one measurement is emitted per second
/// by [`track_fps`](crate::systems::time::track_fps).
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct FpsCounter {
    pub seconds: f32,
    pub frames: u32,
    /// Most recently emitted measurement, shown by the debug overlay.
    pub last: u32,
}
