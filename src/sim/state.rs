//! Game state and core simulation types
//!
//! One [`GameState`] owns every entity for the lifetime of the game. The
//! update step writes the ball and the AI paddle, the input adapter writes the
//! player paddle through [`PlayerControl`](crate::input::PlayerControl), and
//! the renderer only reads.

use glam::Vec2;

use super::rng::{RandomSource, SeededRandom};
use crate::clamp_paddle_y;
use crate::colors;
use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::tuning::Tuning;

/// Which side of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Something the update step wants the outside world to know about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball was returned by the paddle on this side
    PaddleHit(Side),
    /// Ball left the court past this side and was re-served
    BallOut(Side),
}

/// Logical drawing area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Playfield {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle; `x` never changes after construction
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: [f32; 4],
}

impl Paddle {
    /// Paddle at `x`, vertically centered on the playfield
    pub fn centered(x: f32, tuning: &Tuning, field: &Playfield, color: [f32; 4]) -> Self {
        Self {
            x,
            y: field.height / 2.0 - tuning.paddle_height / 2.0,
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            color,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Re-establish `0 <= y <= field.height - height`
    pub fn clamp_to(&mut self, field: &Playfield) {
        self.y = clamp_paddle_y(self.y, self.height, field.height);
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Units per reference frame
    pub vel: Vec2,
    pub radius: f32,
    /// Constant speed magnitude used when serving and after paddle hits
    pub speed: f32,
    pub color: [f32; 4],
}

impl Ball {
    /// Ball at rest in the middle of the field; call [`Ball::serve`] to move it
    pub fn new(tuning: &Tuning, field: &Playfield) -> Self {
        Self {
            pos: field.center(),
            vel: Vec2::ZERO,
            radius: tuning.ball_radius,
            speed: tuning.ball_speed,
            color: colors::BALL,
        }
    }

    /// Put the ball back at center with an independent random sign per axis
    pub fn serve(&mut self, field: &Playfield, rng: &mut dyn RandomSource) {
        self.pos = field.center();
        let sx = rng.sign();
        let sy = rng.sign();
        self.vel = Vec2::new(self.speed * sx, self.speed * sy);
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    pub field: Playfield,
    pub tuning: Tuning,
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    /// Update steps run so far
    pub time_ticks: u64,
    rng: Box<dyn RandomSource>,
}

impl GameState {
    /// New game with default tuning and a PCG32 source seeded with `seed`
    pub fn new(field: Playfield, seed: u64) -> Self {
        Self::with_rng(field, Tuning::default(), Box::new(SeededRandom::new(seed)))
    }

    /// New game with explicit tuning and random source
    pub fn with_rng(field: Playfield, tuning: Tuning, rng: Box<dyn RandomSource>) -> Self {
        let player = Paddle::centered(tuning.paddle_inset, &tuning, &field, colors::PLAYER);
        let ai_x = field.width - tuning.paddle_width - tuning.paddle_inset;
        let ai = Paddle::centered(ai_x, &tuning, &field, colors::AI);

        let mut state = Self {
            field,
            tuning,
            player,
            ai,
            ball: Ball::new(&tuning, &field),
            time_ticks: 0,
            rng,
        };
        state.serve_ball();
        state
    }

    /// Center the ball and draw fresh direction signs
    pub fn serve_ball(&mut self) {
        self.ball.serve(&self.field, self.rng.as_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedSigns;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(Playfield::new(800.0, 400.0), 7);

        assert_eq!(state.player.x, 10.0);
        assert_eq!(state.player.y, 150.0);
        assert_eq!(state.ai.x, 780.0);
        assert_eq!(state.ai.y, 150.0);
        assert_eq!(state.player.color, colors::PLAYER);
        assert_eq!(state.ai.color, colors::AI);

        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.ball.vel.x.abs(), 5.0);
        assert_eq!(state.ball.vel.y.abs(), 5.0);
    }

    #[test]
    fn test_serve_uses_independent_signs() {
        let rng = ScriptedSigns::new([true, false]);
        let state = GameState::with_rng(Playfield::default(), Tuning::default(), Box::new(rng));
        assert_eq!(state.ball.vel, Vec2::new(5.0, -5.0));
    }

    #[test]
    fn test_paddle_clamp() {
        let field = Playfield::new(800.0, 400.0);
        let mut paddle = Paddle::centered(10.0, &Tuning::default(), &field, colors::PLAYER);

        paddle.y = -40.0;
        paddle.clamp_to(&field);
        assert_eq!(paddle.y, 0.0);

        paddle.y = 390.0;
        paddle.clamp_to(&field);
        assert_eq!(paddle.y, 300.0);
        assert_eq!(paddle.bottom(), 400.0);
    }
}
