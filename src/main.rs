//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let settings = canvas_pong::Settings::load();
    let level = settings.level_filter().to_level().unwrap_or(log::Level::Error);
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("Canvas Pong starting...");

    canvas_pong::platform::web::start(&settings).map_err(|e| {
        log::error!("Canvas Pong failed to start: {}", e);
        JsValue::from(e)
    })
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Native build: play a headless match and report what happened
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use canvas_pong::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
    use canvas_pong::platform::{FrameLoop, HeadlessScheduler};
    use canvas_pong::renderer::{RecordingSurface, Surface};
    use canvas_pong::sim::{GameEvent, GameState, Playfield, Side};

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let settings = canvas_pong::Settings::load();
    let clock_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let seed = settings.session_seed(clock_seed);
    log::info!("Game initialized with seed: {}", seed);

    let mut state = GameState::new(Playfield::new(DEFAULT_WIDTH, DEFAULT_HEIGHT), seed);
    let mut surface = RecordingSurface::new(DEFAULT_WIDTH, DEFAULT_HEIGHT);
    let mut frame_loop = FrameLoop::new();

    let mut hits = [0u32; 2];
    let mut outs = [0u32; 2];

    // One minute at 60 Hz with a pointer that lags the ball by a frame
    HeadlessScheduler::new(60 * 60).drive(|time| {
        let rect = surface.client_rect();
        let pointer_y = rect.top + state.ball.pos.y;
        state.player_control().pointer_moved(pointer_y, &rect);

        let report = frame_loop.frame(time, &mut state, &mut surface);
        for event in report.events {
            match event {
                GameEvent::PaddleHit(Side::Left) => hits[0] += 1,
                GameEvent::PaddleHit(Side::Right) => hits[1] += 1,
                GameEvent::BallOut(Side::Left) => outs[0] += 1,
                GameEvent::BallOut(Side::Right) => outs[1] += 1,
                GameEvent::WallBounce => {}
            }
        }
    });

    log::info!(
        "Played {} ticks ({} frames drawn, {} fps)",
        state.time_ticks,
        surface.frames(),
        frame_loop.fps()
    );
    println!("Paddle returns: player {}, AI {}", hits[0], hits[1]);
    println!("Balls lost:     player {}, AI {}", outs[0], outs[1]);
}
