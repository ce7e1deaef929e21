use wasm_bindgen::JsCast;
use web_sys as web;
use zwarp_core::{InputEvent, InputQueue, NavKey};

pub fn wire_keydown(queue: &InputQueue) {
    let Some(window) = web::window() else {
        return;
    };
    let queue = queue.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if let Some(key) = NavKey::from_key_name(&ev.key()) {
            queue.push(InputEvent::Key(key));
            // keep space/arrow keys from scrolling the document underneath
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
