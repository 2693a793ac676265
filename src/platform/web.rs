//! Browser bindings (wasm32 only)
//!
//! Wires the canvas, the pointer listener and `requestAnimationFrame` to the
//! platform-independent game. Everything shares one `Rc<RefCell<WebGame>>`;
//! callbacks run on the single browser thread and never hold the borrow past
//! their own return.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::frame_loop::{FrameLoop, Scheduler};
use crate::renderer::{CanvasSurface, Surface};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Playfield};

/// Id of the `<canvas>` element the game draws on
pub const CANVAS_ID: &str = "pong";

/// Why the game could not start
#[derive(Debug)]
pub enum InitError {
    NoWindow,
    NoDocument,
    NoCanvas(&'static str),
    NotACanvas(&'static str),
    NoContext,
    Listener(String),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::NoWindow => write!(f, "no global window"),
            InitError::NoDocument => write!(f, "window has no document"),
            InitError::NoCanvas(id) => write!(f, "no element with id '{}'", id),
            InitError::NotACanvas(id) => write!(f, "element '{}' is not a canvas", id),
            InitError::NoContext => write!(f, "2D canvas context unavailable"),
            InitError::Listener(e) => write!(f, "failed to attach listener: {}", e),
        }
    }
}

impl std::error::Error for InitError {}

impl From<InitError> for JsValue {
    fn from(e: InitError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}

/// Game instance holding all state
struct WebGame {
    state: GameState,
    frame_loop: FrameLoop,
    surface: CanvasSurface,
}

impl WebGame {
    fn frame(&mut self, time: f64) {
        let report = self.frame_loop.frame(time, &mut self.state, &mut self.surface);
        for event in &report.events {
            if let GameEvent::BallOut(side) = event {
                log::info!("Ball out on the {:?} side, serving again", side);
            }
        }
    }

    fn pointer_moved(&mut self, client_y: f32) {
        let rect = self.surface.client_rect();
        self.state.player_control().pointer_moved(client_y, &rect);
    }
}

/// Find the canvas, build the game and start the frame loop
pub fn start(settings: &Settings) -> Result<(), InitError> {
    let window = web_sys::window().ok_or(InitError::NoWindow)?;
    let document = window.document().ok_or(InitError::NoDocument)?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or(InitError::NoCanvas(CANVAS_ID))?
        .dyn_into()
        .map_err(|_| InitError::NotACanvas(CANVAS_ID))?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .ok_or(InitError::NoContext)?
        .dyn_into()
        .map_err(|_| InitError::NoContext)?;

    let field = Playfield::new(canvas.width() as f32, canvas.height() as f32);
    let seed = settings.session_seed(js_sys::Date::now() as u64);
    log::info!("Canvas {}x{}, seed {}", field.width, field.height, seed);

    let game = Rc::new(RefCell::new(WebGame {
        state: GameState::new(field, seed),
        frame_loop: FrameLoop::new(),
        surface: CanvasSurface::new(canvas.clone(), ctx),
    }));

    setup_pointer_listener(&canvas, game.clone())?;

    AnimationFrameScheduler.run(move |time| game.borrow_mut().frame(time));

    log::info!("Canvas Pong running!");
    Ok(())
}

fn setup_pointer_listener(
    canvas: &HtmlCanvasElement,
    game: Rc<RefCell<WebGame>>,
) -> Result<(), InitError> {
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        game.borrow_mut().pointer_moved(event.client_y() as f32);
    });
    canvas
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
        .map_err(|e| InitError::Listener(format!("{:?}", e)))?;
    closure.forget();
    Ok(())
}

/// `requestAnimationFrame`-driven scheduler; runs until the page goes away
pub struct AnimationFrameScheduler;

impl Scheduler for AnimationFrameScheduler {
    fn run<F>(self, frame: F)
    where
        F: FnMut(f64) + 'static,
    {
        request_animation_frame(Rc::new(RefCell::new(frame)));
    }
}

fn request_animation_frame<F>(frame: Rc<RefCell<F>>)
where
    F: FnMut(f64) + 'static,
{
    let Some(window) = web_sys::window() else {
        log::error!("No window; frame loop stopped");
        return;
    };
    let closure = Closure::once(move |time: f64| {
        (&mut *frame.borrow_mut())(time);
        request_animation_frame(frame);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}
