//! Collision detection and paddle deflection
//!
//! The ball is treated as its circumscribed square, so every test is a plain
//! axis-aligned box overlap.

use glam::Vec2;

use super::state::{Ball, Paddle};

/// True when the ball's bounding square strictly overlaps the paddle
///
/// Edges that merely touch do not count as an overlap.
pub fn overlaps(ball: &Ball, paddle: &Paddle) -> bool {
    ball.right() > paddle.x
        && ball.left() < paddle.right()
        && ball.bottom() > paddle.y
        && ball.top() < paddle.bottom()
}

/// Where on the paddle the ball struck, -1 (top edge) to 1 (bottom edge)
///
/// The raw offset can reach about ±1.2 when the ball clips a paddle corner
/// (roughly 54° after deflection); it is clamped so no return is steeper
/// than the maximum bounce angle.
pub fn collide_point(ball: &Ball, paddle: &Paddle) -> f32 {
    let half = paddle.height / 2.0;
    if half <= 0.0 {
        return 0.0;
    }
    ((ball.pos.y - paddle.center_y()) / half).clamp(-1.0, 1.0)
}

/// Outgoing velocity for a paddle hit
///
/// `direction` picks the horizontal sign; the result always has magnitude
/// `speed`, angled by `max_angle * collide_point`.
pub fn deflect(direction: f32, speed: f32, collide_point: f32, max_angle: f32) -> Vec2 {
    let angle = max_angle * collide_point;
    Vec2::new(direction * speed * angle.cos(), speed * angle.sin())
}
