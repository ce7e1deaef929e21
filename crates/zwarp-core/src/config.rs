//! Startup configuration for the depth engine.
//!
//! A `DepthConfig` plus the list of panel depths is everything the engine
//! needs. Validation happens once, before the engine is built; after that no
//! operation can fail.

use crate::constants::*;
use thiserror::Error;

/// How input maps onto the depth axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavMode {
    /// Free scrolling: inputs add signed deltas to the target.
    #[default]
    Continuous,
    /// Slide deck: inputs step between panel depths behind a settle lock.
    Paginated,
}

impl NavMode {
    /// Parse the page's `data-nav` attribute. Anything unrecognised is continuous.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("paged") | Some("paginated") => NavMode::Paginated,
            _ => NavMode::Continuous,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DepthConfig {
    pub mode: NavMode,
    pub max_depth: f64,
    pub overscroll: f64,
    pub ease: f64,
    pub wheel_speed: f64,
    pub key_step: f64,
    pub touch_factor: f64,
    pub hint_dismiss_depth: f64,
    pub settle_ms: u32,
    pub touch_swipe_min_px: f64,
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            mode: NavMode::Continuous,
            max_depth: MAX_DEPTH,
            overscroll: OVERSCROLL,
            ease: EASE,
            wheel_speed: WHEEL_SPEED,
            key_step: KEY_STEP,
            touch_factor: TOUCH_FACTOR,
            hint_dismiss_depth: HINT_DISMISS_DEPTH,
            settle_ms: SETTLE_MS,
            touch_swipe_min_px: TOUCH_SWIPE_MIN_PX,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("max depth must be positive and finite, got {0}")]
    BadMaxDepth(f64),
    #[error("ease must be in (0, 1], got {0}")]
    BadEase(f64),
    #[error("panel {index} has invalid depth {depth}")]
    BadPanelDepth { index: usize, depth: f64 },
    #[error("panel {index} depth {depth} exceeds max depth {max}")]
    PanelBeyondMax { index: usize, depth: f64, max: f64 },
    #[error("paginated navigation needs at least one stage")]
    NoStages,
}

impl DepthConfig {
    pub fn with_mode(mut self, mode: NavMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_depth(mut self, max_depth: f64) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Upper bound for the target position in the configured mode.
    pub fn depth_limit(&self) -> f64 {
        match self.mode {
            NavMode::Continuous => self.max_depth + self.overscroll.max(0.0),
            NavMode::Paginated => self.max_depth,
        }
    }

    pub fn validate(&self, panel_depths: &[f64]) -> Result<(), ConfigError> {
        if !self.max_depth.is_finite() || self.max_depth <= 0.0 {
            return Err(ConfigError::BadMaxDepth(self.max_depth));
        }
        if !(self.ease > 0.0 && self.ease <= 1.0) {
            return Err(ConfigError::BadEase(self.ease));
        }
        for (index, &depth) in panel_depths.iter().enumerate() {
            if !depth.is_finite() || depth < 0.0 {
                return Err(ConfigError::BadPanelDepth { index, depth });
            }
            if depth > self.max_depth {
                return Err(ConfigError::PanelBeyondMax {
                    index,
                    depth,
                    max: self.max_depth,
                });
            }
        }
        if self.mode == NavMode::Paginated && panel_depths.is_empty() {
            return Err(ConfigError::NoStages);
        }
        Ok(())
    }
}
