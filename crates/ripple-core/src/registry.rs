//! Fixed-capacity wave storage with newest-first recycling.
//!
//! The registry is an arena of `capacity` slots allocated once. Logically the
//! slots form a sequence ordered newest-first; physically it is a ring whose
//! `head` marks the newest slot. Spawning steps `head` back by one, which
//! lands on the old tail: the slot that has gone longest without being
//! re-spawned is the one overwritten. `progress` is never consulted when
//! picking that victim.

use glam::Vec2;
use std::iter::Chain;
use std::slice;

use crate::error::{Result, RippleError};
use crate::wave::WaveSlot;

#[derive(Clone, Debug)]
pub struct WaveRegistry {
    slots: Box<[WaveSlot]>,
    head: usize,
}

impl WaveRegistry {
    /// Allocate `capacity` inert slots. The length never changes afterwards.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RippleError::ZeroCapacity);
        }
        Ok(Self {
            slots: vec![WaveSlot::inert(); capacity].into_boxed_slice(),
            head: 0,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Always equal to [`capacity`](Self::capacity).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Overwrite the tail slot with a fresh wave and make it the newest.
    pub fn spawn(&mut self, position: Vec2, direction: Vec2) {
        let len = self.slots.len();
        self.head = (self.head + len - 1) % len;
        self.slots[self.head] = WaveSlot::fresh(position, direction);
    }

    /// Age every slot by `dt * decay_rate`, saturating at 1.
    ///
    /// Negative or non-finite steps are treated as zero so progress stays
    /// monotonic.
    pub fn advance(&mut self, dt: f32, decay_rate: f32) {
        let step = dt * decay_rate;
        if !step.is_finite() || step <= 0.0 {
            return;
        }
        for slot in self.slots.iter_mut() {
            slot.age(step);
        }
    }

    /// Read-only, newest-first view handed to the renderer.
    #[inline]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            slots: &self.slots,
            head: self.head,
        }
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    /// Return every slot to its initial inert state without reallocating.
    pub fn reset(&mut self) {
        self.slots.fill(WaveSlot::inert());
        self.head = 0;
    }
}

/// Borrowed view over all slots in recycling order (newest first).
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    slots: &'a [WaveSlot],
    head: usize,
}

pub type SnapshotIter<'a> = Chain<slice::Iter<'a, WaveSlot>, slice::Iter<'a, WaveSlot>>;

impl<'a> Snapshot<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `index` counts from the newest wave.
    pub fn get(&self, index: usize) -> Option<&'a WaveSlot> {
        if index >= self.slots.len() {
            return None;
        }
        Some(&self.slots[(self.head + index) % self.slots.len()])
    }

    #[inline]
    pub fn newest(&self) -> Option<&'a WaveSlot> {
        self.get(0)
    }

    /// The slot the next spawn will overwrite.
    #[inline]
    pub fn tail(&self) -> Option<&'a WaveSlot> {
        self.get(self.slots.len().wrapping_sub(1))
    }

    pub fn iter(&self) -> SnapshotIter<'a> {
        let (older, newer) = self.slots.split_at(self.head);
        newer.iter().chain(older.iter())
    }
}

impl<'a> IntoIterator for Snapshot<'a> {
    type Item = &'a WaveSlot;
    type IntoIter = SnapshotIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'b> IntoIterator for &'b Snapshot<'a> {
    type Item = &'a WaveSlot;
    type IntoIter = SnapshotIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
