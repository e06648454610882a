// Surface geometry: floors, pixel-ratio clamping, backing-store sizing.

use backdrop_core::{Viewport, ORB_FLOOR, PARTICLE_FLOOR, WARP_FLOOR};

#[test]
fn backing_store_is_logical_times_clamped_ratio() {
    let vp = Viewport::fit(1800.0, 1000.0, PARTICLE_FLOOR, 2.0);
    assert_eq!(vp.width, 1800.0);
    assert_eq!(vp.height, 1000.0);
    assert_eq!(vp.backing_size(), (3600, 2000));

    let vp = Viewport::fit(1800.0, 1000.0, PARTICLE_FLOOR, 1.5);
    assert_eq!(vp.backing_size(), (2700, 1500));
}

#[test]
fn css_facing_size_stays_logical() {
    // The ratio scales the backing store only; the logical size the drawing
    // code (and the CSS size) sees is unchanged.
    let hi_dpi = Viewport::fit(1200.0, 800.0, PARTICLE_FLOOR, 2.0);
    let lo_dpi = Viewport::fit(1200.0, 800.0, PARTICLE_FLOOR, 1.0);
    assert_eq!(hi_dpi.width, lo_dpi.width);
    assert_eq!(hi_dpi.height, lo_dpi.height);
    assert_ne!(hi_dpi.backing_size(), lo_dpi.backing_size());
}

#[test]
fn pixel_ratio_clamps_to_one_and_two() {
    assert_eq!(Viewport::fit(800.0, 600.0, ORB_FLOOR, 3.0).pixel_ratio, 2.0);
    assert_eq!(Viewport::fit(800.0, 600.0, ORB_FLOOR, 0.5).pixel_ratio, 1.0);
    assert_eq!(Viewport::fit(800.0, 600.0, ORB_FLOOR, 1.25).pixel_ratio, 1.25);
}

#[test]
fn nonsensical_pixel_ratio_reads_as_one() {
    assert_eq!(Viewport::fit(800.0, 600.0, ORB_FLOOR, 0.0).pixel_ratio, 1.0);
    assert_eq!(Viewport::fit(800.0, 600.0, ORB_FLOOR, -1.0).pixel_ratio, 1.0);
    assert_eq!(
        Viewport::fit(800.0, 600.0, ORB_FLOOR, f64::NAN).pixel_ratio,
        1.0
    );
}

#[test]
fn degenerate_container_clamps_to_floor() {
    // A zero-size container is not an error; it reads as the floor size.
    let vp = Viewport::fit(0.0, 0.0, ORB_FLOOR, 1.0);
    assert_eq!(vp.width, 800.0);
    assert_eq!(vp.height, 600.0);
    assert!(vp.backing_size().0 >= 1 && vp.backing_size().1 >= 1);

    let vp = Viewport::fit(0.0, 0.0, WARP_FLOOR, 2.0);
    assert_eq!(vp.height, 640.0);
}

#[test]
fn floor_applies_per_axis() {
    let vp = Viewport::fit(1920.0, 300.0, PARTICLE_FLOOR, 1.0);
    assert_eq!(vp.width, 1920.0);
    assert_eq!(vp.height, 600.0);
}

#[test]
fn fit_is_idempotent_for_identical_inputs() {
    let a = Viewport::fit(1366.0, 768.0, PARTICLE_FLOOR, 1.5);
    let b = Viewport::fit(1366.0, 768.0, PARTICLE_FLOOR, 1.5);
    assert_eq!(a, b);
    assert_eq!(a.backing_size(), b.backing_size());
}
