//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Frame scheduling (`requestAnimationFrame` or a headless counter)
//! - Input events
//! - The drawing surface

pub mod frame_loop;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use frame_loop::{FrameLoop, FrameReport, HeadlessScheduler, Scheduler};
