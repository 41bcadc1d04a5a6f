//! Keyboard input handling

use std::cell::RefCell;
use std::rc::Rc;

use game_core::Game;
use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

use crate::error::StartupError;

/// Feed key and focus events from `window` into the game
///
/// The listeners live for the rest of the page, so their closures are leaked.
pub fn register(window: &Window, game: &Rc<RefCell<Game>>) -> Result<(), StartupError> {
    let down_game = Rc::clone(game);
    let on_key_down = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let key = get_key_from_event(&event);
        let mut game = down_game.borrow_mut();
        // Keep arrow keys from scrolling the page
        if game.bindings().is_bound(&key) {
            event.prevent_default();
        }
        game.key_down(&key);
    }) as Box<dyn FnMut(KeyboardEvent)>);

    let up_game = Rc::clone(game);
    let on_key_up = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        up_game.borrow_mut().key_up(&get_key_from_event(&event));
    }) as Box<dyn FnMut(KeyboardEvent)>);

    // Key-ups are lost while the page is unfocused
    let blur_game = Rc::clone(game);
    let on_blur = Closure::wrap(Box::new(move || {
        debug!("Window lost focus, releasing keys");
        blur_game.borrow_mut().release_all_keys();
    }) as Box<dyn FnMut()>);

    window.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
    window.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
    window.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;

    on_key_down.forget();
    on_key_up.forget();
    on_blur.forget();
    Ok(())
}

/// Extract key from keyboard event
pub fn get_key_from_event(event: &KeyboardEvent) -> String {
    event.key()
}
