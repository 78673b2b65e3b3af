//! Once-per-refresh simulation step.
//!
//! Each frame: poll the pointer, spawn a wave if it moved faster than the
//! dead-zone, age every wave, then hand the snapshot to the renderer. The
//! driver never suspends; whatever drives it (requestAnimationFrame, a winit
//! event loop) simply stops calling [`FrameDriver::frame`] on teardown.

use crate::effect::{FrameParams, RippleEffect};
use crate::pointer::{PointerSample, PointerSource};

/// Consumer of the per-frame parameter snapshot. It gets a read-only view
/// and must not hold on to it past the call.
pub trait RenderSink {
    type Error;

    fn render(&mut self, frame: &FrameParams<'_>) -> Result<(), Self::Error>;
}

pub struct FrameDriver<P, S> {
    effect: RippleEffect,
    pointer: P,
    sink: S,
}

impl<P: PointerSource, S: RenderSink> FrameDriver<P, S> {
    pub fn new(effect: RippleEffect, pointer: P, sink: S) -> Self {
        Self {
            effect,
            pointer,
            sink,
        }
    }

    /// Run one step with `dt` seconds since the previous frame.
    ///
    /// Only the sink can fail; wave state has already been updated by then.
    pub fn frame(&mut self, dt: f32) -> Result<(), S::Error> {
        let PointerSample { position, velocity } = self.pointer.sample();
        let speed = velocity.length();
        if speed > self.effect.config().spawn_threshold {
            log::trace!(
                "[ripple] spawn at ({:.3},{:.3}) speed={:.4}",
                position.x,
                position.y,
                speed
            );
            self.effect.spawn(position, velocity);
        }

        self.effect.advance(dt);

        let frame = self.effect.frame();
        self.sink.render(&frame)
    }

    #[inline]
    pub fn effect(&self) -> &RippleEffect {
        &self.effect
    }

    #[inline]
    pub fn effect_mut(&mut self) -> &mut RippleEffect {
        &mut self.effect
    }

    #[inline]
    pub fn pointer_mut(&mut self) -> &mut P {
        &mut self.pointer
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_parts(self) -> (RippleEffect, P, S) {
        (self.effect, self.pointer, self.sink)
    }
}
