use crate::constants::{
    DECAY_RATE_PER_SEC, DEFAULT_WAVE_CAPACITY, MAX_WAVE_CAPACITY, SPAWN_SPEED_THRESHOLD,
};
use crate::error::{Result, RippleError};

/// Runtime tuning for one ripple effect.
///
/// `capacity` fixes the wave buffer size for the lifetime of the effect and,
/// through it, the layout of the GPU parameter buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct RippleConfig {
    pub capacity: usize,
    pub spawn_threshold: f32,
    pub decay_rate: f32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_WAVE_CAPACITY,
            spawn_threshold: SPAWN_SPEED_THRESHOLD,
            decay_rate: DECAY_RATE_PER_SEC,
        }
    }
}

impl RippleConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_decay_rate(mut self, decay_rate: f32) -> Self {
        self.decay_rate = decay_rate;
        self
    }

    pub fn with_spawn_threshold(mut self, spawn_threshold: f32) -> Self {
        self.spawn_threshold = spawn_threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(RippleError::ZeroCapacity);
        }
        if self.capacity > MAX_WAVE_CAPACITY {
            return Err(RippleError::CapacityTooLarge {
                requested: self.capacity,
                max: MAX_WAVE_CAPACITY,
            });
        }
        if !self.decay_rate.is_finite() || self.decay_rate <= 0.0 {
            return Err(RippleError::InvalidDecayRate(self.decay_rate));
        }
        if !self.spawn_threshold.is_finite() || self.spawn_threshold < 0.0 {
            return Err(RippleError::InvalidSpawnThreshold(self.spawn_threshold));
        }
        Ok(())
    }

    /// Seconds a wave needs to fade from fresh to inert.
    #[inline]
    pub fn decay_duration(&self) -> f32 {
        1.0 / self.decay_rate
    }
}
