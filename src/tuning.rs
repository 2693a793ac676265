//! Game balance as data
//!
//! Every gameplay constant the simulation reads lives in [`Tuning`]. The
//! defaults are the shipped values; tests build variants to isolate a single
//! behavior.

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from each side wall to its paddle
    pub paddle_inset: f32,
    pub ball_radius: f32,
    /// Ball speed in units per reference frame
    pub ball_speed: f32,
    /// Deflection at the very edge of a paddle (radians)
    pub max_bounce_angle: f32,
    /// AI dead zone half-height around the paddle center
    pub ai_deadband: f32,
    /// AI movement per reference frame
    pub ai_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            max_bounce_angle: MAX_BOUNCE_ANGLE,
            ai_deadband: AI_DEADBAND,
            ai_step: AI_STEP,
        }
    }
}
