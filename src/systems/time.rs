//! Time update and frame-rate bookkeeping.
//!
//! - [`update_world_time`] updates the shared
//!   [`WorldTime`](crate::resources::worldtime::WorldTime) resource once per
//!   frame, applying `time_scale` to the provided delta.
//! - [`track_fps`] accumulates frames and emits one fps measurement per
//!   second.

use bevy_ecs::prelude::*;
use log::info;

use crate::resources::fpscounter::FpsCounter;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The system
/// applies the current `time_scale` and writes both `elapsed` and `delta`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
}

/// Accumulate frame count and elapsed time; once per second log the
/// measurement and reset the counters.
pub fn track_fps(mut fps: ResMut<FpsCounter>, time: Res<WorldTime>) {
    fps.seconds += time.delta;
    fps.frames += 1;
    if fps.seconds >= 1.0 {
        info!("fps: {}", fps.frames);
        fps.last = fps.frames;
        fps.seconds = 0.0;
        fps.frames = 0;
    }
}
