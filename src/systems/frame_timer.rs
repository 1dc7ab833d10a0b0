//! Frame timing
//!
//! Produces the capped delta time fed to the viewer and a once-per-second
//! frames-per-second estimate for the window title.

use std::time::{Duration, Instant};

/// Longest step handed to the viewer, in seconds
const MAX_DT: f32 = 0.25;

pub struct FrameTimer {
    last_frame: Instant,
    frames: u32,
    elapsed: Duration,
    fps: Option<f32>,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            frames: 0,
            elapsed: Duration::ZERO,
            fps: None,
        }
    }

    /// Advance to now and return the capped delta time
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now - self.last_frame;
        self.last_frame = now;
        self.tick_with(elapsed)
    }

    /// Advance by `elapsed` and return the capped delta time
    ///
    /// The first step after a stall (startup, refocus) is capped at a quarter second.
    pub fn tick_with(&mut self, elapsed: Duration) -> f32 {
        self.frames += 1;
        self.elapsed += elapsed;
        if self.elapsed >= Duration::from_secs(1) {
            self.fps = Some(self.frames as f32 / self.elapsed.as_secs_f32());
            self.frames = 0;
            self.elapsed = Duration::ZERO;
        }
        elapsed.as_secs_f32().min(MAX_DT)
    }

    /// Frames per second over the last full second, once one has passed
    pub fn fps(&self) -> Option<f32> {
        self.fps
    }
}
