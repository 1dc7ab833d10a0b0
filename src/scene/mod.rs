//! Scene construction
//!
//! Turns configured shapes into the drawable list of a viewer.

mod scene_builder;

pub use scene_builder::SceneBuilder;
