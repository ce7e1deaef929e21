//! Per-panel view state derived from the distance to the camera.
//!
//! Three zones, by `dist = depth - current`:
//! - outside `(-800, 1200)`: hidden;
//! - inside `(-200, 500)`: sharp and interactive;
//! - otherwise: faded and blurred, never interactive.
//!
//! Nothing is carried between frames; every view is recomputed from scratch.

use crate::constants::*;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelView {
    /// Signed distance from the camera, used as the panel's translateZ.
    pub dist: f64,
    pub opacity: f64,
    pub blur: f64,
    pub interactive: bool,
    /// False once opacity drops to 0.01 or below; the panel leaves layout.
    pub visible: bool,
}

/// View state for one panel at signed distance `dist`.
pub fn panel_view(dist: f64) -> PanelView {
    let mut view = PanelView {
        dist,
        ..PanelView::default()
    };
    if dist > HIDE_BEHIND && dist < HIDE_AHEAD {
        view.opacity = (1.0 - dist.abs() / FADE_SPAN).clamp(0.0, 1.0);
        if dist > INTERACT_BEHIND && dist < INTERACT_AHEAD {
            view.interactive = true;
        } else {
            view.blur = (dist.abs() / BLUR_DIVISOR).min(BLUR_MAX);
        }
    }
    view.visible = view.opacity > VISIBLE_MIN_OPACITY;
    view
}

pub type PanelViews = SmallVec<[PanelView; 8]>;

/// Fixed panel depths, in the order the host registered the elements.
#[derive(Clone, Debug, Default)]
pub struct PanelRenderer {
    depths: Vec<f64>,
}

impl PanelRenderer {
    pub fn new(depths: Vec<f64>) -> Self {
        Self { depths }
    }

    pub fn depths(&self) -> &[f64] {
        &self.depths
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// Views for every panel at camera depth `current`, index-aligned with
    /// the depths passed to [`PanelRenderer::new`].
    pub fn render(&self, current: f64) -> PanelViews {
        self.depths.iter().map(|d| panel_view(d - current)).collect()
    }
}
