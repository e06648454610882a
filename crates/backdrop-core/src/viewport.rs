//! Surface geometry shared by all three renderers.
//!
//! A renderer draws in logical units; the backing store behind it is scaled
//! by the device pixel ratio. `fit` is the whole contract: pure, clamped,
//! and idempotent, so resize handling can call it unconditionally.

use crate::constants::{PIXEL_RATIO_MAX, PIXEL_RATIO_MIN};

/// Logical drawing size plus the pixel ratio applied to the backing store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f64,
}

impl Viewport {
    /// Fits a container size, flooring each axis and clamping the device
    /// pixel ratio to [1, 2]. A missing or nonsensical ratio reads as 1.
    pub fn fit(container_w: f32, container_h: f32, floor: (f32, f32), raw_ratio: f64) -> Self {
        let pixel_ratio = if raw_ratio.is_finite() && raw_ratio > 0.0 {
            raw_ratio.clamp(PIXEL_RATIO_MIN, PIXEL_RATIO_MAX)
        } else {
            1.0
        };
        Self {
            width: container_w.max(floor.0),
            height: container_h.max(floor.1),
            pixel_ratio,
        }
    }

    /// Backing-store size in physical pixels: logical size times the clamped
    /// ratio, floored, never zero.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width as f64 * self.pixel_ratio).floor().max(1.0) as u32;
        let h = (self.height as f64 * self.pixel_ratio).floor().max(1.0) as u32;
        (w, h)
    }

    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }
}
