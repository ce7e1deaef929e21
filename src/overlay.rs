use crate::constants::{HIDDEN_CLASS, START_HINT_SELECTOR, START_OVERLAY_ID};
use crate::dom;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(START_OVERLAY_ID)
        .map(|el| el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(true)
}

/// Fade out the "scroll to start" hint. Safe to call when the hint is absent.
pub fn dismiss_start_hint(document: &web::Document) {
    if let Some(el) = dom::html_by_selector(document, START_HINT_SELECTOR) {
        dom::set_style(&el, "opacity", "0");
    }
}
