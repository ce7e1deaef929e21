use crate::constants::WARP_CANVAS_ID;
use crate::dom;
use crate::style;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;
use zwarp_core::{StarColor, Starfield};

/// Background wash drawn every frame; the partial alpha leaves trails.
const TRAIL_FILL: (u8, u8, u8, f64) = (5, 5, 5, 0.5);

pub struct StarfieldLayer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: Starfield,
}

impl StarfieldLayer {
    /// `None` when the page has no warp canvas or no 2D context.
    pub fn from_document(document: &web::Document) -> Option<Self> {
        let canvas = document
            .get_element_by_id(WARP_CANVAS_ID)?
            .dyn_into::<web::HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        let (w, h) = dom::sync_canvas_to_viewport(&canvas);
        Some(Self {
            canvas,
            ctx,
            field: Starfield::new(w, h, rand::random()),
        })
    }

    pub fn resize(&mut self) {
        let (w, h) = dom::sync_canvas_to_viewport(&self.canvas);
        self.field.resize(w, h);
    }

    #[allow(deprecated)]
    pub fn draw(&mut self, warp: f64, bass: u8) {
        let (w, h) = self.field.size();
        let ctx = &self.ctx;
        let (r, g, b, a) = TRAIL_FILL;
        ctx.set_fill_style(&JsValue::from_str(&style::rgba(r, g, b, a)));
        ctx.fill_rect(0.0, 0.0, w, h);

        self.field.step(warp, bass);
        let color = StarColor::for_bass(bass);
        _ = ctx.translate(w / 2.0, h / 2.0);
        for star in self.field.sprites(warp) {
            let paint = JsValue::from_str(&style::rgba(color.r, color.g, color.b, star.alpha));
            ctx.begin_path();
            match star.streak_to {
                Some((ex, ey)) => {
                    ctx.move_to(star.x, star.y);
                    ctx.line_to(ex, ey);
                    ctx.set_stroke_style(&paint);
                    ctx.set_line_width(star.size);
                    ctx.stroke();
                }
                None => {
                    _ = ctx.arc(star.x, star.y, star.size, 0.0, TAU);
                    ctx.set_fill_style(&paint);
                    ctx.fill();
                }
            }
        }
        _ = ctx.translate(-w / 2.0, -h / 2.0);
    }
}

pub fn wire_resize(layer: &Rc<RefCell<StarfieldLayer>>) {
    let layer = layer.clone();
    let closure = Closure::wrap(Box::new(move || {
        layer.borrow_mut().resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
