//! Application systems
//!
//! Window, GPU, timing, and the headless per-frame viewer update.

mod frame_timer;
mod render;
mod viewer;
mod window;

pub use frame_timer::FrameTimer;
pub use render::{RenderError, RenderSystem};
pub use viewer::{Viewer, ViewerKind};
pub use window::{WindowError, WindowSystem};
