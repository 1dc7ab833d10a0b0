//! Application input
//!
//! Maps raw key events to application actions.

mod input_mapper;

pub use input_mapper::{InputAction, InputMapper};
