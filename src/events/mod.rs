pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_keydown;
pub use pointer::{wire_parallax, wire_touch, wire_wheel};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use zwarp_core::{InputEvent, InputQueue};

/// One-shot timer that tells the engine a paginated transition has settled.
pub fn schedule_settle(queue: &InputQueue, settle_ms: u32) {
    let Some(window) = web::window() else {
        queue.push(InputEvent::Settled);
        return;
    };
    let queue = queue.clone();
    let closure = Closure::once_into_js(move || queue.push(InputEvent::Settled));
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref(),
        settle_ms as i32,
    ) {
        log::error!("[nav] settle timer failed: {:?}", e);
    }
}
