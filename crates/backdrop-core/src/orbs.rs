//! Orbiting-gradient orb simulation.
//!
//! Sixteen soft blobs orbit the viewport center on flattened ellipses,
//! pulsing between two palette colors. Pointer movement nudges every orbit
//! cumulatively; the drift is unbounded by design.

use rand::prelude::*;
use std::f32::consts::TAU;

use crate::color::css_rgba_lerp;
use crate::constants::*;

/// The five two-color gradients orbs pulse between.
pub const ORB_PALETTE: [([u8; 3], [u8; 3]); 5] = [
    ([124, 58, 237], [236, 72, 153]), // violet -> pink
    ([59, 130, 246], [56, 189, 248]), // blue -> sky
    ([16, 185, 129], [5, 150, 105]),  // emerald -> teal
    ([245, 158, 11], [234, 88, 12]),  // amber -> orange
    ([168, 85, 247], [99, 102, 241]), // purple -> indigo
];

#[derive(Clone, Copy, Debug)]
pub struct Orb {
    pub angle: f32,
    pub dist: f32,
    pub speed: f32,
    pub radius: f32,
    pub palette: usize,
    pub phase: f32,
}

pub struct OrbField {
    width: f32,
    height: f32,
    orbs: Vec<Orb>,
    rng: StdRng,
}

impl OrbField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            width,
            height,
            orbs: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        field.reseed_population();
        field
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Adopts a new viewport size and regenerates all orbits for it.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.reseed_population();
    }

    /// Regenerates the fixed-size population. Orbit direction is randomized
    /// per orb; palette colors rotate through the five pairs.
    pub fn reseed_population(&mut self) {
        let min_side = self.width.min(self.height);
        let base_radius = min_side * ORB_BASE_RADIUS_FRACTION;
        self.orbs.clear();
        for i in 0..ORB_COUNT {
            let radius =
                base_radius * (ORB_RADIUS_SCALE_MIN + self.rng.gen::<f32>() * ORB_RADIUS_SCALE_SPAN);
            let angle = self.rng.gen::<f32>() * TAU;
            let dist =
                min_side * (ORB_DIST_FRACTION_BASE + self.rng.gen::<f32>() * ORB_DIST_FRACTION_SPAN);
            let direction = if self.rng.gen::<bool>() { 1.0 } else { -1.0 };
            let speed = (ORB_SPEED_BASE + self.rng.gen::<f32>() * ORB_SPEED_SPAN) * direction;
            self.orbs.push(Orb {
                angle,
                dist,
                speed,
                radius,
                palette: i % ORB_PALETTE.len(),
                phase: self.rng.gen::<f32>(),
            });
        }
    }

    /// One simulation step. Phase and angle accumulate monotonically; the
    /// increments are per-frame constants, not dt-scaled, so playback rate
    /// follows the display refresh.
    pub fn advance(&mut self) {
        for o in &mut self.orbs {
            o.phase += ORB_PHASE_STEP;
            o.angle += o.speed;
        }
    }

    /// Parametric position on the flattened ellipse around the composition
    /// center.
    pub fn position(&self, orb: &Orb) -> (f32, f32) {
        (
            self.width * 0.5 + orb.angle.cos() * orb.dist,
            self.height * ORB_CENTER_Y_FRACTION + orb.angle.sin() * orb.dist * ORB_ELLIPSE_FLATTEN,
        )
    }

    /// Pulse position in [0, 1] driving the color blend.
    pub fn pulse(orb: &Orb, index: usize) -> f32 {
        ((orb.phase * 2.0 + index as f32).sin() + 1.0) / 2.0
    }

    /// Current fill color: the orb's palette pair blended at its pulse.
    pub fn color(orb: &Orb, index: usize) -> String {
        let (from, to) = ORB_PALETTE[orb.palette];
        css_rgba_lerp(from, to, Self::pulse(orb, index), ORB_ALPHA)
    }

    /// Cumulative parallax from a pointer offset normalized to [-0.5, 0.5]
    /// per axis. There is no decay or bound: sustained motion progressively
    /// detunes the orbits, which is the intended look.
    pub fn pointer_nudge(&mut self, nx: f32, ny: f32) {
        for o in &mut self.orbs {
            o.angle += nx * ORB_PARALLAX_ANGLE_COEFF;
            o.dist += ny * ORB_PARALLAX_DIST_COEFF;
        }
    }
}
