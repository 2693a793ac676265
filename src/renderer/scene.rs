//! Scene drawing
//!
//! A pure projection of the current game state; nothing here mutates it.

use super::surface::Surface;
use crate::colors;
use crate::consts::{NET_PERIOD, NET_SEGMENT, NET_WIDTH};
use crate::sim::{GameState, Paddle};

/// Draw one full frame
pub fn render(surface: &mut dyn Surface, state: &GameState) {
    let (width, height) = surface.size();

    // Clear
    surface.fill_rect(0.0, 0.0, width, height, colors::BACKGROUND);
    draw_net(surface, width, height);

    // Paddles and ball
    draw_paddle(surface, &state.player);
    draw_paddle(surface, &state.ai);
    let ball = &state.ball;
    surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius, ball.color);
}

/// Dashed vertical center line
fn draw_net(surface: &mut dyn Surface, width: f32, height: f32) {
    let x = width / 2.0 - NET_WIDTH / 2.0;
    let mut y = 0.0;
    while y < height {
        surface.fill_rect(x, y, NET_WIDTH, NET_SEGMENT, colors::NET);
        y += NET_PERIOD;
    }
}

fn draw_paddle(surface: &mut dyn Surface, paddle: &Paddle) {
    surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, paddle.color);
}
