//! Connected-particle network simulation.
//!
//! A seeded population of points drifts inside the viewport, bouncing off
//! the walls; nearby pairs get a connecting edge whose strength grows as
//! they approach. All state lives here so the walk, the reflection rule and
//! the pairwise pass can be exercised without a drawing surface.

use glam::Vec2;
use rand::prelude::*;

use crate::constants::*;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// A connection emitted by the pairwise pass. `strength` is the linear
/// falloff `1 - d/threshold`, in (0, 1].
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub a: Vec2,
    pub b: Vec2,
    pub strength: f32,
    pub hue: f32,
}

pub struct ParticleField {
    width: f32,
    height: f32,
    hue_phase: f32,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    /// Creates a field sized to the viewport and seeds the initial
    /// population. Population count is density-derived, so it scales with
    /// the viewport area rather than a fixed budget.
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            width,
            height,
            hue_phase: HUE_PHASE_START,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        field.reseed_population();
        field
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn hue_phase(&self) -> f32 {
        self.hue_phase
    }

    /// Adopts a new viewport size and reseeds at the new density. In-flight
    /// particles are discarded on purpose; the field carries no identity
    /// across resizes.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.reseed_population();
    }

    /// Regenerates the population for the current size: one particle per
    /// `PARTICLE_AREA_QUOTA` square pixels.
    pub fn reseed_population(&mut self) {
        let count = ((self.width * self.height) / PARTICLE_AREA_QUOTA).floor() as usize;
        self.particles.clear();
        for _ in 0..count {
            let pos = Vec2::new(
                self.rng.gen_range(0.0..=self.width),
                self.rng.gen_range(0.0..=self.height),
            );
            let vel = Vec2::new(
                self.rng.gen_range(-PARTICLE_SPEED_MAX..PARTICLE_SPEED_MAX),
                self.rng.gen_range(-PARTICLE_SPEED_MAX..PARTICLE_SPEED_MAX),
            );
            let radius = self.rng.gen_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX);
            self.particles.push(Particle { pos, vel, radius });
        }
    }

    /// One simulation step: advance the hue phase and integrate positions
    /// with elastic wall reflection. Mutates in place; allocates nothing.
    pub fn advance(&mut self) {
        self.hue_phase += HUE_PHASE_STEP;
        for p in &mut self.particles {
            p.pos += p.vel;
            if p.pos.x < 0.0 {
                p.pos.x = 0.0;
                p.vel.x = -p.vel.x;
            }
            if p.pos.x > self.width {
                p.pos.x = self.width;
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 {
                p.pos.y = 0.0;
                p.vel.y = -p.vel.y;
            }
            if p.pos.y > self.height {
                p.pos.y = self.height;
                p.vel.y = -p.vel.y;
            }
        }
    }

    /// Size-adaptive connection distance.
    pub fn edge_threshold(&self) -> f32 {
        (EDGE_FRACTION * self.width.min(self.height)).clamp(EDGE_MIN, EDGE_MAX)
    }

    /// The O(n²) pairwise pass. Emits an edge for every unordered pair
    /// strictly closer than the threshold; with fewer than two particles
    /// nothing is emitted. Squared distances gate the pass so the square
    /// root only runs for connected pairs.
    pub fn visit_edges(&self, mut visit: impl FnMut(Edge)) {
        if self.particles.len() < 2 {
            return;
        }
        let threshold = self.edge_threshold();
        let threshold_sq = threshold * threshold;
        for i in 0..self.particles.len() {
            let a = self.particles[i];
            for b in &self.particles[i + 1..] {
                let d_sq = a.pos.distance_squared(b.pos);
                if d_sq < threshold_sq {
                    let d = d_sq.sqrt();
                    visit(Edge {
                        a: a.pos,
                        b: b.pos,
                        strength: 1.0 - d / threshold,
                        hue: (self.hue_phase + i as f32 * EDGE_HUE_STEP) % 360.0,
                    });
                }
            }
        }
    }

    /// Hue for a particle's halo: the global phase shifted by position so
    /// neighbors shade into each other.
    pub fn particle_hue(&self, p: &Particle) -> f32 {
        (self.hue_phase + (p.pos.x + p.pos.y) * PARTICLE_HUE_POSITION_COEFF) % 360.0
    }
}
