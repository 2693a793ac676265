//! Pointer input mapping
//!
//! Pointer events arrive in screen space and outside the frame cadence. They
//! are translated into playfield space with the surface's on-screen rectangle
//! and written into the player paddle through [`PlayerControl`], the only
//! writer of `player.y` besides construction.

use crate::sim::{GameState, Paddle, Playfield};

/// On-screen placement of the drawing surface (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ClientRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Convert a screen-space Y into playfield units
    ///
    /// A canvas stretched by CSS has an on-screen height different from its
    /// logical height; the offset is rescaled in that case.
    pub fn to_playfield_y(&self, client_y: f32, field_height: f32) -> f32 {
        let local = client_y - self.top;
        if self.height > 0.0 && self.height != field_height {
            local * field_height / self.height
        } else {
            local
        }
    }
}

/// Write handle for the player paddle
pub struct PlayerControl<'a> {
    paddle: &'a mut Paddle,
    field: Playfield,
}

impl<'a> PlayerControl<'a> {
    pub fn new(paddle: &'a mut Paddle, field: Playfield) -> Self {
        Self { paddle, field }
    }

    /// Center the paddle on `y` (playfield units), then clamp into the field
    pub fn follow_pointer(&mut self, y: f32) {
        self.paddle.y = y - self.paddle.height / 2.0;
        self.paddle.clamp_to(&self.field);
    }

    /// Handle a raw pointer move: screen-space `client_y` over `rect`
    pub fn pointer_moved(&mut self, client_y: f32, rect: &ClientRect) {
        let y = rect.to_playfield_y(client_y, self.field.height);
        self.follow_pointer(y);
    }
}

impl GameState {
    /// The input adapter's handle onto the player paddle
    pub fn player_control(&mut self) -> PlayerControl<'_> {
        PlayerControl::new(&mut self.player, self.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_pointer_centers_paddle() {
        let mut state = GameState::new(Playfield::new(800.0, 400.0), 1);
        state.player_control().follow_pointer(120.0);
        assert_eq!(state.player.y, 70.0);
    }

    #[test]
    fn test_follow_pointer_clamps() {
        let mut state = GameState::new(Playfield::new(800.0, 400.0), 1);

        state.player_control().follow_pointer(-1_000.0);
        assert_eq!(state.player.y, 0.0);

        state.player_control().follow_pointer(10.0);
        assert_eq!(state.player.y, 0.0);

        state.player_control().follow_pointer(5_000.0);
        assert_eq!(state.player.y, 300.0);
    }

    #[test]
    fn test_pointer_subtracts_surface_offset() {
        let mut state = GameState::new(Playfield::new(800.0, 400.0), 1);
        let rect = ClientRect::new(30.0, 80.0, 800.0, 400.0);

        state.player_control().pointer_moved(280.0, &rect);
        assert_eq!(state.player.y, 150.0);
    }

    #[test]
    fn test_pointer_rescales_stretched_canvas() {
        // Canvas shown at half size
        let rect = ClientRect::new(0.0, 100.0, 400.0, 200.0);
        assert_eq!(rect.to_playfield_y(150.0, 400.0), 100.0);
        // Unscaled canvas is a plain subtraction
        let rect = ClientRect::new(0.0, 100.0, 800.0, 400.0);
        assert_eq!(rect.to_playfield_y(150.0, 400.0), 50.0);
    }
}
