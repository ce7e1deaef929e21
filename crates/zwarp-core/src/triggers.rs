//! Fire-once triggers and the counter tween they start.

use crate::constants::{COUNTER_DURATION_MS, COUNTER_FRAME_MS};

/// One-shot latch. Once fired it stays fired for the page session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Latch {
    #[default]
    NotFired,
    Fired,
}

impl Latch {
    /// Returns true exactly once: on the transition from `NotFired` to `Fired`.
    pub fn fire(&mut self) -> bool {
        match self {
            Latch::NotFired => {
                *self = Latch::Fired;
                true
            }
            Latch::Fired => false,
        }
    }

    #[inline]
    pub fn has_fired(&self) -> bool {
        matches!(self, Latch::Fired)
    }
}

/// Fires once when the current depth comes within `radius` of `anchor`.
#[derive(Clone, Debug)]
pub struct ProximityTrigger {
    pub anchor: f64,
    pub radius: f64,
    latch: Latch,
}

impl ProximityTrigger {
    pub fn new(anchor: f64, radius: f64) -> Self {
        Self {
            anchor,
            radius,
            latch: Latch::NotFired,
        }
    }

    pub fn check(&mut self, current: f64) -> bool {
        !self.latch.has_fired() && (self.anchor - current).abs() < self.radius && self.latch.fire()
    }

    pub fn has_fired(&self) -> bool {
        self.latch.has_fired()
    }
}

/// Frame-stepped count-up toward an integer target.
///
/// Each step adds `target / (duration / frame_ms)`. While below the target
/// the display shows the rounded-up value; afterwards it shows the target
/// and the tween is finished.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterTween {
    target: f64,
    value: f64,
    increment: f64,
    done: bool,
}

impl CounterTween {
    pub fn new(target: f64) -> Self {
        Self::with_timing(target, COUNTER_DURATION_MS, COUNTER_FRAME_MS)
    }

    pub fn with_timing(target: f64, duration_ms: f64, frame_ms: f64) -> Self {
        let frames = (duration_ms / frame_ms).max(1.0);
        Self {
            target,
            value: 0.0,
            increment: target / frames,
            done: false,
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one frame and return the text to display.
    pub fn step(&mut self) -> String {
        if !self.done {
            self.value += self.increment;
            if self.value < self.target {
                return format!("{}", self.value.ceil());
            }
            self.done = true;
        }
        format!("{}", self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once() {
        let mut l = Latch::default();
        assert!(!l.has_fired());
        assert!(l.fire());
        assert!(!l.fire());
        assert!(l.has_fired());
    }

    #[test]
    fn proximity_trigger_fires_inside_radius_only_once() {
        let mut t = ProximityTrigger::new(5_500.0, 800.0);
        assert!(!t.check(4_700.0)); // exactly at radius is outside
        assert!(t.check(4_701.0));
        assert!(!t.check(5_500.0));
        assert!(t.has_fired());
    }

    #[test]
    fn counter_counts_up_then_settles_on_target() {
        let mut c = CounterTween::with_timing(250.0, 2_000.0, 16.0);
        assert_eq!(c.step(), "2");
        let mut last = String::new();
        for _ in 0..200 {
            last = c.step();
        }
        assert!(c.is_done());
        assert_eq!(last, "250");
        assert_eq!(c.step(), "250");
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut c = CounterTween::new(0.0);
        assert_eq!(c.step(), "0");
        assert!(c.is_done());
    }
}
