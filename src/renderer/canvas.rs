//! HTML canvas 2D surface (wasm32 only)

use std::f64::consts::TAU;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Surface, css_color};
use crate::input::ClientRect;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: [f32; 4]) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(x as f64, y as f64, r as f64, 0.0, TAU) {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn client_rect(&self) -> ClientRect {
        let rect = self.canvas.get_bounding_client_rect();
        ClientRect::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }
}
