use std::path::PathBuf;

use clap::Parser;
use ripple_core::{
    RippleConfig, DECAY_RATE_PER_SEC, DEFAULT_IMAGE_URL, DEFAULT_WAVE_CAPACITY,
    SPAWN_SPEED_THRESHOLD,
};

#[derive(Parser, Debug)]
#[command(
    name = "ripple-native",
    version,
    about = "Full-screen image with pointer-driven ripples"
)]
pub struct Cli {
    /// Image to display (PNG or JPEG).
    #[arg(value_name = "IMAGE", env = "RIPPLE_IMAGE", default_value = DEFAULT_IMAGE_URL)]
    pub image: PathBuf,

    /// Number of wave slots; old waves are recycled once all are in use.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_WAVE_CAPACITY)]
    pub capacity: usize,

    /// Progress gained per second; a wave fades out after 1/RATE seconds.
    #[arg(long, value_name = "RATE", default_value_t = DECAY_RATE_PER_SEC)]
    pub decay_rate: f32,

    /// Minimum pointer speed (NDC units per frame) that spawns a wave.
    #[arg(long, value_name = "SPEED", default_value_t = SPAWN_SPEED_THRESHOLD)]
    pub threshold: f32,

    /// Start with the debug overlay enabled (toggle with `d`).
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn ripple_config(&self) -> RippleConfig {
        RippleConfig::default()
            .with_capacity(self.capacity)
            .with_decay_rate(self.decay_rate)
            .with_spawn_threshold(self.threshold)
    }
}
