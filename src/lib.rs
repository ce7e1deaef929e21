#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;
use zwarp_core::{CancelToken, DepthConfig, DepthEngine, InputQueue, Latch, NavMode};

mod audio;
mod constants;
mod counters;
mod dom;
mod events;
mod frame;
mod overlay;
mod starfield;
mod style;

use constants::*;

thread_local! {
    static LOOP_TOKEN: RefCell<Option<CancelToken>> = const { RefCell::new(None) };
}

fn config_from_body(document: &web::Document) -> DepthConfig {
    let body = document.body();
    let attr = |name: &str| body.as_ref().and_then(|b| b.get_attribute(name));
    let mut cfg = DepthConfig::default().with_mode(NavMode::from_attr(attr(NAV_MODE_ATTR).as_deref()));
    if let Some(max) = attr(MAX_DEPTH_ATTR).as_deref().and_then(style::parse_number_attr) {
        cfg = cfg.with_max_depth(max);
    }
    cfg
}

fn wire_start_button(document: &web::Document, loudness: &audio::SharedLoudness) {
    let music = audio::music_element(document);
    if let Some(music) = &music {
        audio::wire_volume_controls(document, music);
    } else {
        log::warn!("[audio] no #{} element; running silent", MUSIC_ID);
    }
    let latch = Rc::new(RefCell::new(Latch::NotFired));
    let loudness = loudness.clone();
    dom::add_click_listener(document, START_BUTTON_ID, move || {
        if let Some(doc) = dom::window_document() {
            if !overlay::is_hidden(&doc) {
                overlay::hide(&doc);
            }
        }
        if let Some(music) = &music {
            audio::start(&latch, &loudness, music);
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("zwarp starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
        return Err(JsValue::from_str(&format!("{e:#}")));
    }
    Ok(())
}

/// Stop the frame loop. The page itself never calls this.
#[wasm_bindgen]
pub fn shutdown() {
    LOOP_TOKEN.with(|t| {
        if let Some(token) = t.borrow_mut().take() {
            token.cancel();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().context("no window")?;
    let document = window.document().context("no document")?;
    window.scroll_to_with_x_and_y(0.0, 0.0);

    let world = dom::html_by_id(&document, WORLD_ID)
        .with_context(|| format!("missing #{}", WORLD_ID))?;
    let (stages, depths): (Vec<_>, Vec<_>) = dom::collect_stages(&document)?.into_iter().unzip();
    let engine = DepthEngine::new(config_from_body(&document), depths)
        .context("invalid depth configuration")?;

    let queue = InputQueue::new();
    events::wire_wheel(&queue);
    events::wire_keydown(&queue);
    events::wire_touch(&queue);
    events::wire_parallax(&document, world);

    let loudness = audio::silent_loudness();
    wire_start_button(&document, &loudness);

    let starfield = starfield::StarfieldLayer::from_document(&document).map(|layer| {
        let layer = Rc::new(RefCell::new(layer));
        starfield::wire_resize(&layer);
        layer
    });
    if starfield.is_none() {
        log::info!("no #{} canvas; starfield disabled", WARP_CANVAS_ID);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        queue,
        readout: dom::html_by_id(&document, DEPTH_READOUT_ID),
        progress_bar: dom::html_by_id(&document, PROGRESS_BAR_ID),
        counters: counters::Counters::from_document(&document),
        document,
        stages,
        loudness,
        starfield,
        last_instant: Instant::now(),
    }));
    let token = frame::start_loop(frame_ctx);
    LOOP_TOKEN.with(|t| *t.borrow_mut() = Some(token));
    Ok(())
}
