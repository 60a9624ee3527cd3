//! Pure math helpers.
//!
//! Submodules overview
//! - [`grid`] – tile-grid conversion and snapping
//! - [`animate`] – frame-rate-independent exponential smoothing

pub mod animate;
pub mod grid;
