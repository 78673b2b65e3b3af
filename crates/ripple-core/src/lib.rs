pub mod config;
pub mod constants;
pub mod driver;
pub mod effect;
pub mod error;
pub mod pointer;
pub mod registry;
pub mod uniforms;
pub mod viewport;
pub mod wave;

pub static RIPPLE_WGSL: &str = include_str!("../shaders/ripple.wgsl");

pub use config::*;
pub use constants::*;
pub use driver::*;
pub use effect::*;
pub use error::{Result, RippleError};
pub use pointer::*;
pub use registry::*;
pub use uniforms::*;
pub use viewport::*;
pub use wave::*;
