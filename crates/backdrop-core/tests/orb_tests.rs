// Orb field simulation: fixed population, continuous motion, parallax
// accumulation, color pulsing.

use backdrop_core::{
    OrbField, ORB_COUNT, ORB_PALETTE, ORB_PARALLAX_DIST_COEFF, ORB_PHASE_STEP,
};

fn make_field() -> OrbField {
    OrbField::new(1440.0, 900.0, 7)
}

#[test]
fn population_is_fixed_at_sixteen() {
    let mut field = make_field();
    assert_eq!(field.orbs().len(), ORB_COUNT);
    for _ in 0..1000 {
        field.advance();
    }
    assert_eq!(field.orbs().len(), ORB_COUNT);
    field.resize(640.0, 480.0);
    assert_eq!(field.orbs().len(), ORB_COUNT);
}

#[test]
fn orbits_spin_in_both_directions() {
    let field = make_field();
    assert!(field.orbs().iter().any(|o| o.speed > 0.0));
    assert!(field.orbs().iter().any(|o| o.speed < 0.0));
}

#[test]
fn angle_and_phase_advance_continuously() {
    let mut field = make_field();
    let before: Vec<_> = field.orbs().iter().map(|o| (o.angle, o.phase)).collect();
    field.advance();
    for (orb, (angle, phase)) in field.orbs().iter().zip(&before) {
        // Each step moves the orbit by exactly its own speed; there are no
        // discontinuous jumps absent a resize or pointer drag.
        assert!((orb.angle - angle - orb.speed).abs() < 1e-6);
        assert!((orb.phase - phase - ORB_PHASE_STEP).abs() < 1e-6);
    }
}

#[test]
fn resize_regenerates_orbits() {
    let mut field = make_field();
    let before: Vec<_> = field.orbs().iter().map(|o| o.dist).collect();
    field.resize(640.0, 480.0);
    let changed = field
        .orbs()
        .iter()
        .zip(&before)
        .filter(|(o, d)| o.dist != **d)
        .count();
    assert!(changed > 0, "resize should reroll orbit geometry");
}

#[test]
fn positions_sit_on_the_flattened_ellipse() {
    let field = make_field();
    for orb in field.orbs() {
        let (x, y) = field.position(orb);
        let dx = x - 1440.0 * 0.5;
        let dy = y - 900.0 * 0.55;
        assert!((dx - orb.angle.cos() * orb.dist).abs() < 1e-3);
        assert!((dy - orb.angle.sin() * orb.dist * 0.55).abs() < 1e-3);
    }
}

#[test]
fn pointer_nudge_accumulates_without_bound() {
    let mut field = make_field();
    let before: Vec<_> = field.orbs().iter().map(|o| o.dist).collect();
    let steps = 500;
    for _ in 0..steps {
        field.pointer_nudge(0.0, 0.5);
    }
    let expected = steps as f32 * 0.5 * ORB_PARALLAX_DIST_COEFF;
    for (orb, dist) in field.orbs().iter().zip(&before) {
        // No decay, no clamp: sustained motion keeps detuning the orbit.
        assert!((orb.dist - dist - expected).abs() < 1e-2);
    }
}

#[test]
fn pulse_stays_normalized() {
    let mut field = make_field();
    for _ in 0..2000 {
        field.advance();
        for (i, orb) in field.orbs().iter().enumerate() {
            let p = OrbField::pulse(orb, i);
            assert!((0.0..=1.0).contains(&p));
        }
    }
}

#[test]
fn color_blends_between_the_palette_pair() {
    let field = make_field();
    let orb = field.orbs()[0];
    let (from, to) = ORB_PALETTE[orb.palette];
    let color = OrbField::color(&orb, 0);
    assert!(color.starts_with("rgba("));
    assert!(color.ends_with(", 0.75)"));
    // Every channel lands between the two endpoints.
    let channels: Vec<i32> = color
        .trim_start_matches("rgba(")
        .trim_end_matches(')')
        .split(',')
        .take(3)
        .map(|c| c.trim().parse().unwrap())
        .collect();
    for (i, ch) in channels.iter().enumerate() {
        let lo = from[i].min(to[i]) as i32;
        let hi = from[i].max(to[i]) as i32;
        assert!((lo..=hi).contains(ch), "channel {i} out of range: {ch}");
    }
}
