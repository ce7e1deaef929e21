use crate::dom;
use crate::style;
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;
use zwarp_core::parallax::tilt_degrees;
use zwarp_core::{InputEvent, InputQueue};

pub fn wire_wheel(queue: &InputQueue) {
    let Some(window) = web::window() else {
        return;
    };
    let queue = queue.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        queue.push(InputEvent::Wheel {
            delta_y: ev.delta_y(),
        });
    }) as Box<dyn FnMut(_)>);
    // must be non-passive for prevent_default to take effect
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

#[inline]
fn first_touch_y(ev: &web::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| t.client_y() as f64)
}

pub fn wire_touch(queue: &InputQueue) {
    let Some(window) = web::window() else {
        return;
    };
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);

    let q = queue.clone();
    let start = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(y) = first_touch_y(&ev) {
            q.push(InputEvent::TouchStart { y });
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        start.as_ref().unchecked_ref(),
        &opts,
    );
    start.forget();

    let q = queue.clone();
    let moved = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(y) = first_touch_y(&ev) {
            q.push(InputEvent::TouchMove { y });
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        moved.as_ref().unchecked_ref(),
        &opts,
    );
    moved.forget();
}

/// Tilt the scene toward the pointer. Purely cosmetic; bypasses the engine.
pub fn wire_parallax(document: &web::Document, world: web::HtmlElement) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (w, h) = dom::viewport_size();
        let tilt = tilt_degrees(
            DVec2::new(w, h),
            DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
        );
        dom::set_style(&world, "transform", &style::world_tilt(tilt.x, tilt.y));
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
