//! Event types and observers.
//!
//! Events provide a decoupled way for the input system to communicate with
//! window-level behavior: the input system fires an event on a key edge and
//! the matching observer performs the action.
//!
//! Submodules:
//! - [`quit`] – request a clean exit of the main loop
//! - [`switchdebug`] – toggle the debug overlay on/off
//! - [`switchfullscreen`] – toggle the window between fullscreen and windowed

pub mod quit;
pub mod switchdebug;
pub mod switchfullscreen;
