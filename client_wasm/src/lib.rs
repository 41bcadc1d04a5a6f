//! Browser client for Pong
//!
//! Canvas 2D host for `game_core`: acquires the canvas, feeds keyboard
//! events into the [`Game`] and drives it from `requestAnimationFrame`.
//! Note: the crate is empty unless compiled for wasm32

#![cfg(target_arch = "wasm32")]

mod canvas;
mod error;
mod input;
mod logger;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::CanvasSurface;
use error::StartupError;
use game_core::{Config, Game, GameRng};
use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Id of the `<canvas>` element the game draws on
pub const CANVAS_ID: &str = "gameCanvas";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });

    run().map_err(|err| {
        error!("Pong failed to start: {}", err);
        JsValue::from_str(&err.to_string())
    })
}

fn run() -> Result<(), StartupError> {
    let window = web_sys::window().ok_or(StartupError::NoWindow)?;
    let document = window.document().ok_or(StartupError::NoDocument)?;
    let surface = CanvasSurface::from_document(&document, CANVAS_ID)?;

    // Playfield follows the canvas size set by the page
    let config = Config::with_playfield(surface.width(), surface.height());
    let game = Game::with_config(config, GameRng::from_entropy())?;
    let game = Rc::new(RefCell::new(game));

    input::register(&window, &game)?;
    info!(
        "Pong ready on a {}x{} canvas",
        surface.width(),
        surface.height()
    );
    start_frame_loop(window, game, surface)
}

/// Tick the game once per animation frame, forever
fn start_frame_loop(
    window: Window,
    game: Rc<RefCell<Game>>,
    mut surface: CanvasSurface,
) -> Result<(), StartupError> {
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let next_frame = Rc::clone(&frame);
    let loop_window = window.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        game.borrow_mut().tick(&mut surface);

        if let Some(callback) = next_frame.borrow().as_ref() {
            if let Err(err) = request_frame(&loop_window, callback) {
                error!("requestAnimationFrame failed, stopping: {:?}", err);
            }
        }
    }) as Box<dyn FnMut()>));

    let first_frame = frame.borrow();
    if let Some(callback) = first_frame.as_ref() {
        request_frame(&window, callback)?;
    }
    Ok(())
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}
