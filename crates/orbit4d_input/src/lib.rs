//! Orbit input handling
//!
//! Raw winit keyboard and mouse events are accumulated between frames and
//! turned into per-plane rotation deltas and a zoom delta once per frame.
//! Which plane each input axis drives is configurable through [`PlaneBindings`].

mod bindings;
mod orbit_controller;

pub use bindings::{InputAxis, PlaneBindings};
pub use orbit_controller::{CameraControl, OrbitController};
