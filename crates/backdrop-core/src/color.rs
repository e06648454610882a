//! CSS color-string builders for the Canvas2D renderers.
//!
//! Kept pure so the color laws (pulse interpolation, hue/alpha falloff) can
//! be asserted natively without a canvas.

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Channel-wise interpolation of two RGB triples, formatted for a canvas
/// fill style. Channels floor to whole values like the CSS serialization.
pub fn css_rgba_lerp(from: [u8; 3], to: [u8; 3], t: f32, alpha: f32) -> String {
    let ch = |i: usize| lerp(from[i] as f32, to[i] as f32, t).floor() as i32;
    format!("rgba({}, {}, {}, {})", ch(0), ch(1), ch(2), alpha)
}

/// `hsla()` string with hue in degrees and saturation/lightness in percent.
pub fn css_hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> String {
    format!("hsla({hue:.2}, {saturation}%, {lightness:.2}%, {alpha:.3})")
}
