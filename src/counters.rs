use crate::constants::{COUNTER_SELECTOR, COUNTER_TARGET_ATTR};
use crate::dom;
use crate::style;
use web_sys as web;
use zwarp_core::constants::{COUNTER_ANCHOR, COUNTER_RADIUS};
use zwarp_core::{CounterTween, ProximityTrigger};

/// Stat counters that count up once, the first time the camera flies past
/// their section.
pub struct Counters {
    trigger: ProximityTrigger,
    pending: Vec<(web::HtmlElement, f64)>,
    running: Vec<(web::HtmlElement, CounterTween)>,
}

impl Counters {
    pub fn from_document(document: &web::Document) -> Self {
        let pending = dom::html_all(document, COUNTER_SELECTOR)
            .into_iter()
            .filter_map(|el| {
                let raw = el.get_attribute(COUNTER_TARGET_ATTR).unwrap_or_default();
                match style::parse_number_attr(&raw) {
                    Some(target) => Some((el, target)),
                    None => {
                        log::warn!("[counters] ignoring counter with {}={:?}", COUNTER_TARGET_ATTR, raw);
                        None
                    }
                }
            })
            .collect::<Vec<_>>();
        Self {
            trigger: ProximityTrigger::new(COUNTER_ANCHOR, COUNTER_RADIUS),
            pending,
            running: Vec::new(),
        }
    }

    pub fn update(&mut self, current: f64) {
        if self.trigger.check(current) {
            log::info!("[counters] start {} counters at z={:.0}", self.pending.len(), current);
            self.running = self
                .pending
                .drain(..)
                .map(|(el, target)| (el, CounterTween::new(target)))
                .collect();
        }
        for (el, tween) in &mut self.running {
            el.set_inner_text(&tween.step());
        }
        self.running.retain(|(_, tween)| !tween.is_done());
    }
}
