//! Byte layouts shared with `shaders/ripple.wgsl`.

use crate::constants::WAVE_COUNT_PLACEHOLDER;
use crate::effect::FrameParams;
use crate::registry::Snapshot;

/// One element of the WGSL `array<Wave, WAVE_COUNT>`; 32-byte stride keeps it
/// valid in a uniform address space.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WaveUniform {
    pub position: [f32; 2],
    pub direction: [f32; 2],
    pub progress: f32,
    pub _pad: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    pub cover_scale: [f32; 2],
    pub aspect: f32,
    pub debug: u32,
}

impl FrameUniform {
    pub fn from_frame(frame: &FrameParams<'_>) -> Self {
        Self {
            cover_scale: frame.viewport.cover_scale.to_array(),
            aspect: frame.viewport.aspect,
            debug: frame.debug as u32,
        }
    }
}

/// Refill `out` with one record per slot, newest first.
pub fn pack_waves(snapshot: Snapshot<'_>, out: &mut Vec<WaveUniform>) {
    out.clear();
    out.extend(snapshot.iter().map(|w| WaveUniform {
        position: w.position.to_array(),
        direction: w.direction.to_array(),
        progress: w.progress,
        _pad: [0.0; 3],
    }));
}

/// Size in bytes of the wave array binding for `capacity` slots.
#[inline]
pub fn wave_buffer_size(capacity: usize) -> u64 {
    (capacity * std::mem::size_of::<WaveUniform>()) as u64
}

/// The ripple shader with its array length fixed to `capacity`.
pub fn wave_shader_source(capacity: usize) -> String {
    crate::RIPPLE_WGSL.replace(WAVE_COUNT_PLACEHOLDER, &format!("{}u", capacity))
}
