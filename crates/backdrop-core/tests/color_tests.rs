// Color-string builders used by the Canvas2D renderers.

use backdrop_core::{css_hsla, css_rgba_lerp, lerp};

#[test]
fn lerp_hits_endpoints_and_midpoint() {
    assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
    assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    assert_eq!(lerp(10.0, 0.0, 0.25), 7.5);
}

#[test]
fn rgba_lerp_endpoints_reproduce_the_palette_pair() {
    let from = [124, 58, 237];
    let to = [236, 72, 153];
    assert_eq!(css_rgba_lerp(from, to, 0.0, 0.75), "rgba(124, 58, 237, 0.75)");
    assert_eq!(css_rgba_lerp(from, to, 1.0, 0.75), "rgba(236, 72, 153, 0.75)");
}

#[test]
fn rgba_lerp_floors_channels() {
    // Midpoint of 124 and 236 is exactly 180; of 58 and 72 is 65.
    assert_eq!(
        css_rgba_lerp([124, 58, 237], [236, 72, 153], 0.5, 1.0),
        "rgba(180, 65, 195, 1)"
    );
}

#[test]
fn hsla_formats_for_canvas() {
    assert_eq!(css_hsla(260.0, 80.0, 40.0, 0.18), "hsla(260.00, 80%, 40.00%, 0.180)");
    assert_eq!(css_hsla(0.5, 90.0, 65.0, 0.9), "hsla(0.50, 90%, 65.00%, 0.900)");
}
