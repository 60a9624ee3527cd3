//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `camera` – smooth-follow rig and the derived raylib camera
//! - `cursor` – tile under the mouse pointer, rewritten every frame
//! - `debugmode` – presence toggles the debug overlay
//! - `entities` – fixed-capacity entity slots and archetype spawners
//! - `fontstore` – loaded fonts keyed by string IDs
//! - `fpscounter` – frames-per-second accumulator
//! - `fullscreen` – presence means the window is fullscreen
//! - `gameconfig` – window settings loaded from config.ini
//! - `input` – per-frame keyboard and wheel state
//! - `quit` – presence means the main loop should exit
//! - `sprites` – fixed sprite table indexed by sprite id
//! - `windowsize` – current window dimensions in pixels
//! - `worldtime` – simulation time and delta

pub mod camera;
pub mod cursor;
pub mod debugmode;
pub mod entities;
pub mod fontstore;
pub mod fpscounter;
pub mod fullscreen;
pub mod gameconfig;
pub mod input;
pub mod quit;
pub mod sprites;
pub mod windowsize;
pub mod worldtime;
