use glam::Vec2;

use crate::error::{Result, RippleError};

/// Aspect ratio and cover-scale forwarded to the renderer with every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub aspect: f32,
    pub cover_scale: Vec2,
}

impl Viewport {
    /// Fit an image of `image_w`x`image_h` so it covers a `surface_w`x`surface_h`
    /// surface without stretching.
    pub fn fit(surface_w: u32, surface_h: u32, image_w: u32, image_h: u32) -> Result<Self> {
        if image_w == 0 || image_h == 0 {
            return Err(RippleError::DegenerateImage {
                width: image_w,
                height: image_h,
            });
        }
        if surface_w == 0 || surface_h == 0 {
            return Err(RippleError::DegenerateSurface {
                width: surface_w,
                height: surface_h,
            });
        }
        let aspect = surface_w as f32 / surface_h as f32;
        let image_aspect = image_w as f32 / image_h as f32;
        Ok(Self {
            aspect,
            cover_scale: cover_scale(aspect, image_aspect),
        })
    }
}

/// Scale applied to image UVs so the image fills the screen, like CSS
/// `background-size: cover`. Both components are in (0, 1].
#[inline]
pub fn cover_scale(screen_aspect: f32, image_aspect: f32) -> Vec2 {
    if screen_aspect < image_aspect {
        Vec2::new(screen_aspect / image_aspect, 1.0)
    } else {
        Vec2::new(1.0, image_aspect / screen_aspect)
    }
}
