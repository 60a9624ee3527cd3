//! Islander library.
//!
//! This module exposes the game's math helpers, ECS resources, systems, and
//! events for use in integration tests and as a reusable library.

pub mod events;
pub mod game;
pub mod math;
pub mod resources;
pub mod systems;
