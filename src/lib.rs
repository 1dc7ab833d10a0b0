//! Orbit4D - orbit viewer for 3D and 4D polytopes
//!
//! The binary in `main.rs` wires these modules to a window; everything here is
//! usable headless.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
