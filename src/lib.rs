//! Canvas Pong - a two-paddle arcade game on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, update step)
//! - `renderer`: Scene drawing onto an abstract 2D surface
//! - `input`: Pointer-to-paddle mapping
//! - `platform`: Frame loop driver and browser bindings
//! - `tuning`: Game constants as data
//! - `settings`: Persisted runtime preferences

pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Reference frame length; all per-frame speeds are per reference frame
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Playfield used when no surface dictates otherwise
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_INSET: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Units per reference frame
    pub const BALL_SPEED: f32 = 5.0;
    /// Largest deflection off a paddle edge (45 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// AI paddle dead zone half-height
    pub const AI_DEADBAND: f32 = 35.0;
    /// AI paddle step per reference frame
    pub const AI_STEP: f32 = 5.0;

    /// Center net
    pub const NET_WIDTH: f32 = 2.0;
    pub const NET_SEGMENT: f32 = 20.0;
    pub const NET_PERIOD: f32 = 30.0;
}

/// Colors for game elements (RGBA, 0..1)
pub mod colors {
    /// #111
    const DARK: f32 = 0x11 as f32 / 255.0;

    pub const BACKGROUND: [f32; 4] = [DARK, DARK, DARK, 1.0];
    pub const NET: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PLAYER: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const AI: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// Clamp a paddle's top edge into `[0, field_height - paddle_height]`
#[inline]
pub fn clamp_paddle_y(y: f32, paddle_height: f32, field_height: f32) -> f32 {
    y.max(0.0).min((field_height - paddle_height).max(0.0))
}
