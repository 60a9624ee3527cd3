//! Engine systems.
//!
//! This module groups the ECS systems that advance input, simulation, and
//! rendering. Their per-frame order is wired as a chained schedule in
//! `main.rs`: input → camera → movement → cursor picking → render → fps.
//!
//! Submodules overview
//! - [`camera`] – integrate zoom, glide after the player, derive the view
//! - [`cursor`] – map the mouse through the camera onto the tile grid
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – move the player from the held direction keys
//! - [`render`] – draw tiles, entities, selection, and the debug overlay
//! - [`time`] – update simulation time and track fps

pub mod camera;
pub mod cursor;
pub mod input;
pub mod movement;
pub mod render;
pub mod time;
