// Warp renderer CPU state: pointer engagement transitions and the uniform
// block layout handed to the GPU.

use std::mem::{align_of, offset_of, size_of};

use backdrop_core::{PointerState, WarpState, WarpUniforms};

#[test]
fn pointer_starts_centered_and_idle() {
    let p = PointerState::default();
    assert_eq!((p.x, p.y), (0.5, 0.5));
    assert_eq!(p.activity, 0.0);
}

#[test]
fn pointer_engagement_transitions() {
    let mut p = PointerState::default();

    p.moved(0.25, 0.75);
    assert_eq!((p.x, p.y), (0.25, 0.75));
    assert_eq!(p.activity, 1.0);

    p.released();
    assert_eq!(p.activity, 0.6);

    p.pressed();
    assert_eq!(p.activity, 1.0);

    p.left();
    assert_eq!(p.activity, 0.0);
}

#[test]
fn pointer_coordinates_clamp_to_unit_range() {
    let mut p = PointerState::default();
    p.moved(-0.5, 1.5);
    assert_eq!((p.x, p.y), (0.0, 1.0));
}

#[test]
fn leaving_the_surface_zeroes_the_attractor_terms() {
    let mut state = WarpState::new(1800.0, 1000.0);
    state.pointer.moved(0.3, 0.4);
    assert_eq!(state.uniforms().pointer_active, 1.0);

    state.pointer.left();
    let u = state.uniforms();
    // The shader multiplies both the attractor flow and the pointer glow by
    // this scalar, so the next rendered frame carries neither.
    assert_eq!(u.pointer_active, 0.0);
    // Position is retained; only engagement resets.
    assert_eq!(u.pointer, [0.3, 0.4]);
}

#[test]
fn release_settles_on_the_partial_plateau() {
    let mut state = WarpState::new(800.0, 640.0);
    state.pointer.pressed();
    state.pointer.released();
    assert_eq!(state.uniforms().pointer_active, 0.6);
}

#[test]
fn resize_touches_only_the_resolution() {
    let mut state = WarpState::new(1800.0, 1000.0);
    state.pointer.moved(0.3, 0.4);
    state.set_elapsed(12.5);

    state.set_resolution(900.0, 640.0);
    let u = state.uniforms();
    assert_eq!(u.resolution, [900.0, 640.0]);
    assert_eq!(u.time, 12.5);
    assert_eq!(u.pointer, [0.3, 0.4]);
    assert_eq!(u.pointer_active, 1.0);
}

#[test]
fn uniform_block_matches_the_wgsl_layout() {
    // struct WarpUniforms { resolution: vec2<f32>, time: f32,
    //   pointer_active: f32, pointer: vec2<f32>, _pad: vec2<f32> }
    assert_eq!(size_of::<WarpUniforms>(), 32);
    assert_eq!(align_of::<WarpUniforms>(), 4);
    assert_eq!(offset_of!(WarpUniforms, resolution), 0);
    assert_eq!(offset_of!(WarpUniforms, time), 8);
    assert_eq!(offset_of!(WarpUniforms, pointer_active), 12);
    assert_eq!(offset_of!(WarpUniforms, pointer), 16);
}

#[test]
fn uniforms_are_plain_bytes() {
    let mut state = WarpState::new(1024.0, 768.0);
    state.set_elapsed(1.0);
    let u = state.uniforms();
    let bytes = bytemuck::bytes_of(&u);
    assert_eq!(bytes.len(), 32);
    let back: &WarpUniforms = bytemuck::from_bytes(bytes);
    assert_eq!(*back, u);
}
