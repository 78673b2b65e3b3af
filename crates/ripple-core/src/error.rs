use thiserror::Error;

/// Construction-time failures. Nothing in the per-frame path can fail; once a
/// [`crate::RippleEffect`] exists every step is infallible.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RippleError {
    #[error("wave capacity must be at least 1")]
    ZeroCapacity,
    #[error("wave capacity {requested} exceeds the uniform buffer limit of {max}")]
    CapacityTooLarge { requested: usize, max: usize },
    #[error("decay rate must be finite and positive, got {0}")]
    InvalidDecayRate(f32),
    #[error("spawn threshold must be finite and non-negative, got {0}")]
    InvalidSpawnThreshold(f32),
    #[error("image has degenerate size {width}x{height}")]
    DegenerateImage { width: u32, height: u32 },
    #[error("surface has degenerate size {width}x{height}")]
    DegenerateSurface { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, RippleError>;
