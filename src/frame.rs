use crate::audio::SharedLoudness;
use crate::constants::SLOW_FRAME_MS;
use crate::counters::Counters;
use crate::dom;
use crate::events;
use crate::overlay;
use crate::starfield::StarfieldLayer;
use crate::style;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use zwarp_core::{CancelToken, DepthEngine, FrameSnapshot, InputQueue, NavEffect};

pub struct FrameContext {
    pub engine: DepthEngine,
    pub queue: InputQueue,
    pub document: web::Document,

    /// Index-aligned with the engine's panel depths.
    pub stages: Vec<web::HtmlElement>,
    pub readout: Option<web::HtmlElement>,
    pub progress_bar: Option<web::HtmlElement>,

    pub loudness: SharedLoudness,
    pub starfield: Option<Rc<RefCell<StarfieldLayer>>>,
    pub counters: Counters,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_ms = (now - self.last_instant).as_secs_f64() * 1000.0;
        self.last_instant = now;
        if dt_ms > SLOW_FRAME_MS {
            log::debug!("[frame] slow frame {:.1} ms", dt_ms);
        }

        let effects = self.engine.handle_all(self.queue.drain());
        for effect in effects {
            match effect {
                NavEffect::DismissHint => overlay::dismiss_start_hint(&self.document),
                NavEffect::TransitionStarted { settle_ms, .. } => {
                    events::schedule_settle(&self.queue, settle_ms)
                }
            }
        }

        let snap = self.engine.tick();
        self.apply_panels(&snap);
        self.apply_progress(&snap);
        self.counters.update(snap.current);

        let bass = self.loudness.borrow_mut().sample();
        if let Some(layer) = &self.starfield {
            layer.borrow_mut().draw(snap.warp, bass);
        }
    }

    fn apply_panels(&self, snap: &FrameSnapshot) {
        for (el, view) in self.stages.iter().zip(snap.panels.iter()) {
            dom::set_style(el, "transform", &style::panel_transform(view.dist));
            dom::set_style(el, "opacity", &view.opacity.to_string());
            dom::set_style(el, "pointer-events", style::pointer_events(view.interactive));
            dom::set_style(el, "filter", &style::blur_filter(view.blur));
            dom::set_style(el, "display", style::display(view.visible));
        }
    }

    fn apply_progress(&self, snap: &FrameSnapshot) {
        if let Some(el) = &self.readout {
            el.set_inner_text(&snap.progress.readout.to_string());
        }
        if let Some(el) = &self.progress_bar {
            dom::set_style(el, "width", &style::percent_width(snap.progress.percent));
        }
    }
}

/// Run `frame()` on every animation frame until the returned token is
/// cancelled. The page never cancels it; `shutdown()` and tests can.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> CancelToken {
    let token = CancelToken::new();
    let loop_token = token.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if loop_token.is_cancelled() {
            log::info!("[frame] loop cancelled");
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    token
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
