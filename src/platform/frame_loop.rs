//! Frame loop driver
//!
//! A [`Scheduler`] calls back once per display refresh with a timestamp.
//! [`FrameLoop`] runs exactly one simulation step of `FRAME_DT` for every
//! refresh, then renders once. Timestamps only feed the FPS counter.

use crate::consts::FRAME_DT;
use crate::renderer::{Surface, render};
use crate::sim::{GameEvent, GameState, tick};

/// Host frame scheduling
pub trait Scheduler {
    /// Invoke `frame(timestamp_ms)` once per display refresh
    fn run<F>(self, frame: F)
    where
        F: FnMut(f64) + 'static;
}

/// What one displayed frame did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub events: Vec<GameEvent>,
}

/// Per-refresh update/render driver plus FPS tracking
#[derive(Debug, Clone)]
pub struct FrameLoop {
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Frames per second over the last 60 frames (0 until the window fills)
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// One refresh: update once, then draw
    pub fn frame(
        &mut self,
        time_ms: f64,
        state: &mut GameState,
        surface: &mut dyn Surface,
    ) -> FrameReport {
        let events = tick(state, FRAME_DT);
        render(surface, state);
        self.track_fps(time_ms);
        FrameReport { events }
    }

    fn track_fps(&mut self, time_ms: f64) {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();

        // Oldest entry is the one we'll overwrite next
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = time_ms - oldest;
            if elapsed > 0.0 {
                let frames = (self.frame_times.len() - 1) as f64;
                self.fps = (frames * 1000.0 / elapsed).round() as u32;
            }
        }
    }
}

/// Runs a fixed number of frames back to back with synthetic timestamps
#[derive(Debug, Clone)]
pub struct HeadlessScheduler {
    frames: u64,
    frame_ms: f64,
    start_ms: f64,
}

impl HeadlessScheduler {
    /// `frames` frames at 60 Hz
    pub fn new(frames: u64) -> Self {
        Self {
            frames,
            frame_ms: 1000.0 / 60.0,
            start_ms: 1000.0,
        }
    }

    pub fn with_frame_ms(mut self, frame_ms: f64) -> Self {
        self.frame_ms = frame_ms;
        self
    }

    /// Like [`Scheduler::run`] without requiring a `'static` callback
    pub fn drive(&self, mut frame: impl FnMut(f64)) {
        for i in 0..self.frames {
            frame(self.start_ms + i as f64 * self.frame_ms);
        }
    }
}

impl Scheduler for HeadlessScheduler {
    fn run<F>(self, frame: F)
    where
        F: FnMut(f64) + 'static,
    {
        self.drive(frame);
    }
}
