//! Drawing surface abstraction
//!
//! The renderer only needs two fill primitives plus the surface's size and
//! on-screen placement, so any 2D backend can sit behind [`Surface`].

use crate::input::ClientRect;

/// A 2D drawing target with a fixed logical size
pub trait Surface {
    /// Logical (width, height)
    fn size(&self) -> (f32, f32);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]);

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: [f32; 4]);

    /// Where the surface sits on screen, for pointer translation
    fn client_rect(&self) -> ClientRect;
}

/// CSS color string for an RGBA color
pub fn css_color(color: [f32; 4]) -> String {
    let [r, g, b, a] = color.map(|c| c.clamp(0.0, 1.0));
    let to_byte = |c: f32| (c * 255.0).round() as u8;
    if a >= 1.0 {
        format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
    } else {
        format!("rgba({}, {}, {}, {:.3})", to_byte(r), to_byte(g), to_byte(b), a)
    }
}
