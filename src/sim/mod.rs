//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Injected random source only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{collide_point, deflect, overlaps};
pub use rng::{RandomSource, ScriptedSigns, SeededRandom};
pub use state::{Ball, GameEvent, GameState, Paddle, Playfield, Side};
pub use tick::tick;
