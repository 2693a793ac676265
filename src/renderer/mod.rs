//! 2D rendering module
//!
//! Draws the scene through the [`Surface`] trait: a canvas 2D context in the
//! browser, a command recorder everywhere else.

pub mod recording;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use scene::render;
pub use surface::{Surface, css_color};
