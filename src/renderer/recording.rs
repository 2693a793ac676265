//! Headless surface that records draw calls
//!
//! Used by the native binary and by tests to observe what a frame drew.

use super::surface::Surface;
use crate::input::ClientRect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: [f32; 4],
    },
    Circle {
        x: f32,
        y: f32,
        r: f32,
        color: [f32; 4],
    },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    client_rect: ClientRect,
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingSurface {
    /// Surface of the given size, placed at the screen origin
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            client_rect: ClientRect::new(0.0, 0.0, width, height),
            commands: Vec::new(),
            frames: 0,
        }
    }

    /// Commands since the last full-surface clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames begun (full-surface clears seen)
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn is_full_clear(&self, x: f32, y: f32, w: f32, h: f32) -> bool {
        x <= 0.0 && y <= 0.0 && w >= self.width && h >= self.height
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
        // A full clear starts a new frame; keep only the latest one
        if self.is_full_clear(x, y, w, h) {
            self.commands.clear();
            self.frames += 1;
        }
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Circle { x, y, r, color });
    }

    fn client_rect(&self) -> ClientRect {
        self.client_rect
    }
}
