//! Input normalisation: wheel, keyboard and touch events become target
//! changes on a [`PositionIntegrator`].
//!
//! DOM listeners only push [`InputEvent`]s onto an [`InputQueue`]; the frame
//! loop drains the queue in order and feeds each event to the
//! [`InputMapper`], so all state changes happen on one logical thread.

use crate::config::{DepthConfig, NavMode};
use crate::integrator::PositionIntegrator;
use crate::triggers::Latch;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Direction of a discrete navigation intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Forward,
    Back,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value to a navigation intent.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "ArrowRight" | " " => Some(NavKey::Forward),
            "ArrowUp" | "ArrowLeft" => Some(NavKey::Back),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Wheel { delta_y: f64 },
    Key(NavKey),
    TouchStart { y: f64 },
    TouchMove { y: f64 },
    /// The paginated settle timer elapsed.
    Settled,
}

/// Side effects the host has to carry out after an input was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEffect {
    DismissHint,
    /// A stage change was accepted; the host must deliver
    /// [`InputEvent::Settled`] after `settle_ms`.
    TransitionStarted { stage: usize, settle_ms: u32 },
}

pub type NavEffects = SmallVec<[NavEffect; 2]>;

/// Shared FIFO between DOM listeners and the frame loop.
#[derive(Clone, Default)]
pub struct InputQueue {
    inner: Rc<RefCell<VecDeque<InputEvent>>>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, ev: InputEvent) {
        self.inner.borrow_mut().push_back(ev);
    }

    /// Take every pending event, oldest first.
    pub fn drain(&self) -> VecDeque<InputEvent> {
        std::mem::take(&mut *self.inner.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

/// Transition gate for paginated navigation. Not reentrant: inputs that
/// arrive while `Transitioning` are dropped, never queued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionLock {
    #[default]
    Idle,
    Transitioning,
}

/// Continuous mode: every input is a signed delta on the target.
#[derive(Clone, Debug)]
pub struct FreeScroll {
    wheel_speed: f64,
    key_step: f64,
    touch_factor: f64,
    touch_y: Option<f64>,
}

impl FreeScroll {
    fn apply(&mut self, ev: InputEvent, pos: &mut PositionIntegrator) {
        let delta = match ev {
            InputEvent::Wheel { delta_y } => delta_y * self.wheel_speed,
            InputEvent::Key(NavKey::Forward) => self.key_step,
            InputEvent::Key(NavKey::Back) => -self.key_step,
            InputEvent::TouchStart { y } => {
                self.touch_y = Some(y);
                return;
            }
            InputEvent::TouchMove { y } => {
                let Some(prev) = self.touch_y.replace(y) else {
                    return;
                };
                (prev - y) * self.touch_factor
            }
            InputEvent::Settled => return,
        };
        if delta.is_finite() {
            pos.shift_target(delta);
        }
    }
}

/// Paginated mode: step between stage depths, one transition at a time.
#[derive(Clone, Debug)]
pub struct StageStepper {
    stages: Vec<f64>,
    index: usize,
    lock: TransitionLock,
    settle_ms: u32,
    swipe_min_px: f64,
    touch_anchor: Option<f64>,
}

impl StageStepper {
    /// Stages are visited in ascending depth order.
    pub fn new(mut stages: Vec<f64>, settle_ms: u32, swipe_min_px: f64) -> Self {
        stages.sort_by(f64::total_cmp);
        Self {
            stages,
            index: 0,
            lock: TransitionLock::Idle,
            settle_ms,
            swipe_min_px,
            touch_anchor: None,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn lock(&self) -> TransitionLock {
        self.lock
    }

    #[inline]
    pub fn stages(&self) -> &[f64] {
        &self.stages
    }

    fn apply(&mut self, ev: InputEvent, pos: &mut PositionIntegrator) -> Option<NavEffect> {
        let dir = match ev {
            InputEvent::Settled => {
                self.lock = TransitionLock::Idle;
                log::debug!("[nav] settled on stage {}", self.index);
                return None;
            }
            InputEvent::Wheel { delta_y } if delta_y > 0.0 => NavKey::Forward,
            InputEvent::Wheel { delta_y } if delta_y < 0.0 => NavKey::Back,
            InputEvent::Wheel { .. } => return None,
            InputEvent::Key(k) => k,
            InputEvent::TouchStart { y } => {
                self.touch_anchor = Some(y);
                return None;
            }
            InputEvent::TouchMove { y } => {
                let anchor = self.touch_anchor?;
                let drag = anchor - y;
                if drag.is_nan() || drag.abs() < self.swipe_min_px {
                    return None;
                }
                self.touch_anchor = Some(y);
                if drag > 0.0 {
                    NavKey::Forward
                } else {
                    NavKey::Back
                }
            }
        };
        self.step(dir, pos)
    }

    fn step(&mut self, dir: NavKey, pos: &mut PositionIntegrator) -> Option<NavEffect> {
        if self.lock == TransitionLock::Transitioning {
            log::trace!("[nav] {:?} dropped during transition", dir);
            return None;
        }
        let next = match dir {
            NavKey::Forward if self.index + 1 < self.stages.len() => self.index + 1,
            NavKey::Back if self.index > 0 => self.index - 1,
            _ => return None,
        };
        self.index = next;
        pos.jump_to(self.stages[next]);
        self.lock = TransitionLock::Transitioning;
        log::debug!("[nav] stage {} -> depth {}", next, self.stages[next]);
        Some(NavEffect::TransitionStarted {
            stage: next,
            settle_ms: self.settle_ms,
        })
    }
}

#[derive(Clone, Debug)]
pub enum MapperMode {
    Continuous(FreeScroll),
    Paginated(StageStepper),
}

/// Turns input events into target changes and reports side effects.
#[derive(Clone, Debug)]
pub struct InputMapper {
    mode: MapperMode,
    hint: Latch,
    hint_depth: f64,
}

impl InputMapper {
    pub fn new(cfg: &DepthConfig, stage_depths: &[f64]) -> Self {
        let mode = match cfg.mode {
            NavMode::Continuous => MapperMode::Continuous(FreeScroll {
                wheel_speed: cfg.wheel_speed,
                key_step: cfg.key_step,
                touch_factor: cfg.touch_factor,
                touch_y: None,
            }),
            NavMode::Paginated => MapperMode::Paginated(StageStepper::new(
                stage_depths.to_vec(),
                cfg.settle_ms,
                cfg.touch_swipe_min_px,
            )),
        };
        Self {
            mode,
            hint: Latch::NotFired,
            hint_depth: cfg.hint_dismiss_depth,
        }
    }

    pub fn mode(&self) -> &MapperMode {
        &self.mode
    }

    /// The paginated stepper, if this mapper runs in paginated mode.
    pub fn stepper(&self) -> Option<&StageStepper> {
        match &self.mode {
            MapperMode::Paginated(s) => Some(s),
            MapperMode::Continuous(_) => None,
        }
    }

    pub fn hint_dismissed(&self) -> bool {
        self.hint.has_fired()
    }

    pub fn apply(&mut self, ev: InputEvent, pos: &mut PositionIntegrator) -> NavEffects {
        let mut effects = NavEffects::new();
        match &mut self.mode {
            MapperMode::Continuous(free) => free.apply(ev, pos),
            MapperMode::Paginated(stepper) => {
                if let Some(effect) = stepper.apply(ev, pos) {
                    effects.push(effect);
                }
            }
        }
        if pos.target() > self.hint_depth && self.hint.fire() {
            effects.push(NavEffect::DismissHint);
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn continuous() -> (InputMapper, PositionIntegrator) {
        let cfg = DepthConfig::default();
        (
            InputMapper::new(&cfg, &[]),
            PositionIntegrator::new(cfg.depth_limit(), cfg.ease),
        )
    }

    #[test]
    fn key_names_map_to_intents() {
        assert_eq!(NavKey::from_key_name("ArrowDown"), Some(NavKey::Forward));
        assert_eq!(NavKey::from_key_name("ArrowRight"), Some(NavKey::Forward));
        assert_eq!(NavKey::from_key_name(" "), Some(NavKey::Forward));
        assert_eq!(NavKey::from_key_name("ArrowUp"), Some(NavKey::Back));
        assert_eq!(NavKey::from_key_name("ArrowLeft"), Some(NavKey::Back));
        assert_eq!(NavKey::from_key_name("Enter"), None);
    }

    #[test]
    fn wheel_scales_by_speed_factor() {
        let (mut m, mut p) = continuous();
        m.apply(InputEvent::Wheel { delta_y: 100.0 }, &mut p);
        assert_eq!(p.target(), 500.0);
        m.apply(InputEvent::Wheel { delta_y: -300.0 }, &mut p);
        assert_eq!(p.target(), 0.0);
    }

    #[test]
    fn keys_step_by_fixed_amount() {
        let (mut m, mut p) = continuous();
        m.apply(InputEvent::Key(NavKey::Forward), &mut p);
        m.apply(InputEvent::Key(NavKey::Forward), &mut p);
        m.apply(InputEvent::Key(NavKey::Back), &mut p);
        assert_eq!(p.target(), 400.0);
    }

    #[test]
    fn touch_drag_uses_previous_point() {
        let (mut m, mut p) = continuous();
        // move without a start point is ignored
        m.apply(InputEvent::TouchMove { y: 100.0 }, &mut p);
        assert_eq!(p.target(), 0.0);
        m.apply(InputEvent::TouchStart { y: 500.0 }, &mut p);
        m.apply(InputEvent::TouchMove { y: 450.0 }, &mut p);
        assert_eq!(p.target(), 150.0);
        m.apply(InputEvent::TouchMove { y: 470.0 }, &mut p);
        assert_eq!(p.target(), 90.0);
    }

    #[test]
    fn non_finite_wheel_is_ignored() {
        let (mut m, mut p) = continuous();
        m.apply(InputEvent::Wheel { delta_y: f64::NAN }, &mut p);
        m.apply(InputEvent::Wheel { delta_y: f64::INFINITY }, &mut p);
        assert_eq!(p.target(), 0.0);
    }

    #[test]
    fn hint_dismissed_once_past_threshold() {
        let (mut m, mut p) = continuous();
        let fx = m.apply(InputEvent::Wheel { delta_y: 20.0 }, &mut p);
        assert!(fx.is_empty()); // target == 100 is not past it
        let fx = m.apply(InputEvent::Wheel { delta_y: 1.0 }, &mut p);
        assert_eq!(fx.as_slice(), &[NavEffect::DismissHint]);
        let fx = m.apply(InputEvent::Wheel { delta_y: 100.0 }, &mut p);
        assert!(fx.is_empty());
        assert!(m.hint_dismissed());
    }

    #[test]
    fn settled_is_a_no_op_when_continuous() {
        let (mut m, mut p) = continuous();
        m.apply(InputEvent::Key(NavKey::Forward), &mut p);
        m.apply(InputEvent::Settled, &mut p);
        assert_eq!(p.target(), 400.0);
    }

    #[test]
    fn stepper_sorts_stages() {
        let s = StageStepper::new(vec![9_000.0, 0.0, 4_000.0], 800, 40.0);
        assert_eq!(s.stages(), &[0.0, 4_000.0, 9_000.0]);
    }

    #[test]
    fn paginated_touch_needs_minimum_swipe() {
        let cfg = DepthConfig::default().with_mode(NavMode::Paginated);
        let mut m = InputMapper::new(&cfg, &[0.0, 4_000.0]);
        let mut p = PositionIntegrator::new(cfg.depth_limit(), cfg.ease);
        m.apply(InputEvent::TouchStart { y: 300.0 }, &mut p);
        assert!(m.apply(InputEvent::TouchMove { y: 280.0 }, &mut p).is_empty());
        let fx = m.apply(InputEvent::TouchMove { y: 250.0 }, &mut p);
        assert!(fx.contains(&NavEffect::TransitionStarted {
            stage: 1,
            settle_ms: 800
        }));
        assert_eq!(p.target(), 4_000.0);
    }

    #[test]
    fn queue_drains_in_order() {
        let q = InputQueue::new();
        let listener = q.clone();
        listener.push(InputEvent::Key(NavKey::Forward));
        listener.push(InputEvent::Wheel { delta_y: 3.0 });
        assert_eq!(q.len(), 2);
        let drained: Vec<_> = q.drain().into_iter().collect();
        assert_eq!(
            drained,
            vec![
                InputEvent::Key(NavKey::Forward),
                InputEvent::Wheel { delta_y: 3.0 }
            ]
        );
        assert!(q.is_empty());
    }
}
