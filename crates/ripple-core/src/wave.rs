//! A single ripple disturbance.

use glam::Vec2;

use crate::constants::{FRESH_PROGRESS, INERT_PROGRESS};

/// One wave record as seen by the renderer.
///
/// `direction` is the raw pointer velocity at spawn time; its magnitude
/// carries the wave's intensity. `progress` runs from 0 (just spawned) to 1
/// (fully decayed, no visible effect) and never decreases until the slot is
/// recycled by a new spawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveSlot {
    pub position: Vec2,
    pub direction: Vec2,
    pub progress: f32,
}

impl Default for WaveSlot {
    fn default() -> Self {
        Self::inert()
    }
}

impl WaveSlot {
    /// Zeroed, fully decayed slot. Every registry slot starts like this.
    pub const fn inert() -> Self {
        Self {
            position: Vec2::ZERO,
            direction: Vec2::ZERO,
            progress: INERT_PROGRESS,
        }
    }

    pub const fn fresh(position: Vec2, direction: Vec2) -> Self {
        Self {
            position,
            direction,
            progress: FRESH_PROGRESS,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.progress < INERT_PROGRESS
    }

    #[inline]
    pub(crate) fn age(&mut self, step: f32) {
        self.progress = (self.progress + step).min(INERT_PROGRESS);
    }
}
