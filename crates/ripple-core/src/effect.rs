use glam::Vec2;

use crate::config::RippleConfig;
use crate::error::Result;
use crate::registry::{Snapshot, WaveRegistry};
use crate::viewport::Viewport;

/// Everything the renderer receives for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameParams<'a> {
    pub waves: Snapshot<'a>,
    pub viewport: Viewport,
    pub debug: bool,
}

/// Wave state plus the viewport values and debug flag forwarded with it.
///
/// Building one requires a validated config and a viewport derived from a
/// loaded image, so a frame loop can never run ahead of its resources.
#[derive(Clone, Debug)]
pub struct RippleEffect {
    config: RippleConfig,
    registry: WaveRegistry,
    viewport: Viewport,
    debug: bool,
}

impl RippleEffect {
    pub fn new(config: RippleConfig, viewport: Viewport) -> Result<Self> {
        config.validate()?;
        let registry = WaveRegistry::new(config.capacity)?;
        log::info!(
            "[ripple] effect ready: capacity={} decay_rate={:.3}/s (~{:.2}s) threshold={}",
            config.capacity,
            config.decay_rate,
            config.decay_duration(),
            config.spawn_threshold
        );
        Ok(Self {
            config,
            registry,
            viewport,
            debug: false,
        })
    }

    #[inline]
    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    #[inline]
    pub fn registry(&self) -> &WaveRegistry {
        &self.registry
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        log::debug!(
            "[ripple] viewport aspect={:.3} cover=({:.3},{:.3})",
            viewport.aspect,
            viewport.cover_scale.x,
            viewport.cover_scale.y
        );
        self.viewport = viewport;
    }

    #[inline]
    pub fn debug(&self) -> bool {
        self.debug
    }

    #[inline]
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn toggle_debug(&mut self) -> bool {
        self.debug = !self.debug;
        self.debug
    }

    #[inline]
    pub(crate) fn spawn(&mut self, position: Vec2, direction: Vec2) {
        self.registry.spawn(position, direction);
    }

    #[inline]
    pub(crate) fn advance(&mut self, dt: f32) {
        self.registry.advance(dt, self.config.decay_rate);
    }

    pub fn reset(&mut self) {
        self.registry.reset();
    }

    pub fn frame(&self) -> FrameParams<'_> {
        FrameParams {
            waves: self.registry.snapshot(),
            viewport: self.viewport,
            debug: self.debug,
        }
    }
}
