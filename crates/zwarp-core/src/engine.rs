//! The depth-navigation engine: one integrator, one input mapper, one panel
//! renderer, ticked once per display frame.
//!
//! There is no fixed timestep. The easing constant is tuned for ~60 Hz and
//! runs faster or slower in wall-clock terms on other refresh rates.

use crate::config::{ConfigError, DepthConfig};
use crate::constants::WARP_GAIN;
use crate::input::{InputEvent, InputMapper, NavEffects};
use crate::integrator::PositionIntegrator;
use crate::panels::{PanelRenderer, PanelViews};
use crate::progress::Progress;
use std::cell::Cell;
use std::rc::Rc;

/// Everything a frame publishes to the DOM and to the ambient effects.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub current: f64,
    pub target: f64,
    /// `target - current` after this frame's advance.
    pub gap: f64,
    /// Scaled gap that drives the starfield.
    pub warp: f64,
    pub panels: PanelViews,
    pub progress: Progress,
}

/// Shared stop flag for a running frame loop.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

pub struct DepthEngine {
    config: DepthConfig,
    position: PositionIntegrator,
    mapper: InputMapper,
    panels: PanelRenderer,
}

impl DepthEngine {
    /// Validate the configuration and build an engine at depth 0.
    pub fn new(config: DepthConfig, panel_depths: Vec<f64>) -> Result<Self, ConfigError> {
        config.validate(&panel_depths)?;
        let position = PositionIntegrator::new(config.depth_limit(), config.ease);
        let mapper = InputMapper::new(&config, &panel_depths);
        log::info!(
            "[engine] mode={:?} panels={} max_depth={} limit={}",
            config.mode,
            panel_depths.len(),
            config.max_depth,
            position.limit()
        );
        Ok(Self {
            config,
            position,
            mapper,
            panels: PanelRenderer::new(panel_depths),
        })
    }

    pub fn config(&self) -> &DepthConfig {
        &self.config
    }

    pub fn position(&self) -> &PositionIntegrator {
        &self.position
    }

    pub fn mapper(&self) -> &InputMapper {
        &self.mapper
    }

    pub fn panels(&self) -> &PanelRenderer {
        &self.panels
    }

    pub fn handle(&mut self, ev: InputEvent) -> NavEffects {
        self.mapper.apply(ev, &mut self.position)
    }

    /// Apply events in order and collect their effects.
    pub fn handle_all(&mut self, events: impl IntoIterator<Item = InputEvent>) -> NavEffects {
        let mut effects = NavEffects::new();
        for ev in events {
            effects.extend(self.handle(ev));
        }
        effects
    }

    /// Views at the current depth without advancing.
    pub fn snapshot(&self) -> FrameSnapshot {
        let current = self.position.current();
        let gap = self.position.gap();
        FrameSnapshot {
            current,
            target: self.position.target(),
            gap,
            warp: gap * WARP_GAIN,
            panels: self.panels.render(current),
            progress: Progress::of(current, self.config.max_depth),
        }
    }

    /// One animation frame: advance, then render.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.position.advance();
        self.snapshot()
    }

    /// Tick until `token` is cancelled, handing each frame to `on_frame`.
    /// Returns the number of frames run.
    pub fn run_until_cancelled(
        &mut self,
        token: &CancelToken,
        mut on_frame: impl FnMut(&FrameSnapshot),
    ) -> u64 {
        let mut frames = 0;
        while !token.is_cancelled() {
            let snap = self.tick();
            on_frame(&snap);
            frames += 1;
        }
        frames
    }
}
