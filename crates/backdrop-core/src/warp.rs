//! CPU-side state for the shader warp renderer.
//!
//! The fragment program does all the field math; the CPU only tracks the
//! handful of scalars it feeds the uniform block each frame. `WarpUniforms`
//! mirrors the WGSL layout exactly (size 32, align 16).

use bytemuck::{Pod, Zeroable};

use crate::constants::{POINTER_ENGAGED, POINTER_GONE, POINTER_RELEASED};

/// Continuous pointer engagement feeding the attractor blend.
///
/// `activity` is not a boolean: it holds 1 while the pointer moves or is
/// pressed over the surface, drops to a 0.6 plateau on release, and resets
/// to 0 when the pointer leaves the bounds. The shader multiplies the
/// attractor and glow terms by it, so effects fade with engagement instead
/// of toggling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub activity: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            x: 0.5,
            y: 0.5,
            activity: POINTER_GONE,
        }
    }
}

impl PointerState {
    /// Pointer moved over the surface at normalized coordinates.
    pub fn moved(&mut self, x: f32, y: f32) {
        self.x = x.clamp(0.0, 1.0);
        self.y = y.clamp(0.0, 1.0);
        self.activity = POINTER_ENGAGED;
    }

    pub fn pressed(&mut self) {
        self.activity = POINTER_ENGAGED;
    }

    pub fn released(&mut self) {
        self.activity = POINTER_RELEASED;
    }

    /// Pointer left the surface bounds; attractor and glow vanish from the
    /// next frame on.
    pub fn left(&mut self) {
        self.activity = POINTER_GONE;
    }
}

/// Everything the warp renderer keeps between frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WarpState {
    pub resolution: [f32; 2],
    pub elapsed: f32,
    pub pointer: PointerState,
}

impl WarpState {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            resolution: [width, height],
            elapsed: 0.0,
            pointer: PointerState::default(),
        }
    }

    /// Updated on resize only; time and pointer update every frame.
    pub fn set_resolution(&mut self, width: f32, height: f32) {
        self.resolution = [width, height];
    }

    pub fn set_elapsed(&mut self, seconds: f32) {
        self.elapsed = seconds;
    }

    pub fn uniforms(&self) -> WarpUniforms {
        WarpUniforms {
            resolution: self.resolution,
            time: self.elapsed,
            pointer_active: self.pointer.activity,
            pointer: [self.pointer.x, self.pointer.y],
            _pad: [0.0; 2],
        }
    }
}

/// Wire layout of the WGSL uniform block.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct WarpUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub pointer_active: f32,
    pub pointer: [f32; 2],
    pub _pad: [f32; 2],
}
