//! Pointer position/velocity sampling.
//!
//! Frontends feed raw pointer positions from their event handlers; the frame
//! loop polls one [`PointerSample`] per frame.

use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Pointer state for one frame, in normalized device coordinates (y up).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub velocity: Vec2,
}

pub trait PointerSource {
    fn sample(&mut self) -> PointerSample;
}

impl<T: PointerSource> PointerSource for Rc<RefCell<T>> {
    fn sample(&mut self) -> PointerSample {
        self.borrow_mut().sample()
    }
}

/// Velocity is the displacement since the previous sample, so a pointer that
/// stops moving reports zero on the next frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    position: Vec2,
    previous: Vec2,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at `position` without reporting a jump from the origin.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            previous: position,
        }
    }

    #[inline]
    pub fn set_position(&mut self, ndc: Vec2) {
        self.position = ndc;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

impl PointerSource for PointerTracker {
    fn sample(&mut self) -> PointerSample {
        let velocity = self.position - self.previous;
        self.previous = self.position;
        PointerSample {
            position: self.position,
            velocity,
        }
    }
}

/// Map a pixel position inside a `width`x`height` surface to NDC.
#[inline]
pub fn canvas_to_ndc(x_px: f32, y_px: f32, width: f32, height: f32) -> Vec2 {
    if width > 0.0 && height > 0.0 {
        let u = (x_px / width).clamp(0.0, 1.0);
        let v = (y_px / height).clamp(0.0, 1.0);
        Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0)
    } else {
        Vec2::ZERO
    }
}
