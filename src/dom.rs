use crate::constants::*;
use crate::style;
use anyhow::{anyhow, Context};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn html_by_selector(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn html_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Every `.stage` element with its depth. A stage without a numeric
/// `data-z` is a markup bug and aborts startup.
pub fn collect_stages(document: &web::Document) -> anyhow::Result<Vec<(web::HtmlElement, f64)>> {
    html_all(document, STAGE_SELECTOR)
        .into_iter()
        .enumerate()
        .map(|(i, el)| {
            let raw = el
                .get_attribute(STAGE_DEPTH_ATTR)
                .with_context(|| format!("stage {} has no {}", i, STAGE_DEPTH_ATTR))?;
            let depth = style::parse_number_attr(&raw)
                .ok_or_else(|| anyhow!("stage {} has bad {}={:?}", i, STAGE_DEPTH_ATTR, raw))?;
            Ok((el, depth))
        })
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn viewport_size() -> (f64, f64) {
    web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        })
        .unwrap_or((0.0, 0.0))
}

pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let (w, h) = viewport_size();
    canvas.set_width((w as u32).max(1));
    canvas.set_height((h as u32).max(1));
    (w, h)
}
