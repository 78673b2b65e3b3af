// Wave tuning shared by the web and native frontends.

// Registry sizing
pub const DEFAULT_WAVE_CAPACITY: usize = 200; // slots in the wave buffer
pub const MAX_WAVE_CAPACITY: usize = 2048; // 2048 * 32 B fills a 64 KiB uniform binding

// Spawning
pub const SPAWN_SPEED_THRESHOLD: f32 = 0.001; // NDC units per frame; pointer jitter below this is ignored

// Decay
pub const DECAY_RATE_PER_SEC: f32 = 0.9; // progress gained per second, ~1.1 s to fully fade

// Initial slot state
pub const INERT_PROGRESS: f32 = 1.0;
pub const FRESH_PROGRESS: f32 = 0.0;

// Image shown when nothing else is configured (web serves it next to index.html)
pub const DEFAULT_IMAGE_URL: &str = "images/unsplash.jpg";

// Placeholder in the WGSL source replaced by the registry capacity
pub const WAVE_COUNT_PLACEHOLDER: &str = "WAVE_COUNT";
