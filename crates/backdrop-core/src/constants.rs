/// Renderer tuning constants.
///
/// These express intended behavior (clamp limits, densities, per-frame
/// increments) and keep magic numbers out of the simulation code. None of
/// them are exposed to hosts; a backdrop is mounted as-is.
// Device pixel ratio clamp; bounds backing-store cost on dense displays
pub const PIXEL_RATIO_MIN: f64 = 1.0;
pub const PIXEL_RATIO_MAX: f64 = 2.0;

// Logical size floors so a degenerate container never starves a simulation.
// The warp surface reserves extra vertical room for its glow falloff.
pub const PARTICLE_FLOOR: (f32, f32) = (800.0, 600.0);
pub const ORB_FLOOR: (f32, f32) = (800.0, 600.0);
pub const WARP_FLOOR: (f32, f32) = (800.0, 640.0);

// One particle per this many square pixels of viewport area
pub const PARTICLE_AREA_QUOTA: f32 = 18_000.0;

// Particle seeding ranges (logical px and px/frame)
pub const PARTICLE_SPEED_MAX: f32 = 0.6;
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 2.2;

// Global hue phase; color only, never physics
pub const HUE_PHASE_START: f32 = 260.0;
pub const HUE_PHASE_STEP: f32 = 0.06;
pub const EDGE_HUE_STEP: f32 = 3.0;
pub const PARTICLE_HUE_POSITION_COEFF: f32 = 0.02;

// Connection threshold = clamp(EDGE_FRACTION * min(w, h), EDGE_MIN, EDGE_MAX)
pub const EDGE_FRACTION: f32 = 0.18;
pub const EDGE_MIN: f32 = 120.0;
pub const EDGE_MAX: f32 = 200.0;

// Soft halo drawn around each particle core
pub const PARTICLE_HALO_SCALE: f32 = 6.0;

// Orb population and per-frame increments
pub const ORB_COUNT: usize = 16;
pub const ORB_PHASE_STEP: f32 = 0.0025;
pub const ORB_SPEED_BASE: f32 = 0.0012;
pub const ORB_SPEED_SPAN: f32 = 0.0012;

// Orb geometry as fractions of min(w, h)
pub const ORB_BASE_RADIUS_FRACTION: f32 = 0.18;
pub const ORB_RADIUS_SCALE_MIN: f32 = 0.45;
pub const ORB_RADIUS_SCALE_SPAN: f32 = 0.55;
pub const ORB_DIST_FRACTION_BASE: f32 = 0.15;
pub const ORB_DIST_FRACTION_SPAN: f32 = 0.4;

// Orbit center sits below the visual midline; y is flattened for a
// horizon-like composition
pub const ORB_CENTER_Y_FRACTION: f32 = 0.55;
pub const ORB_ELLIPSE_FLATTEN: f32 = 0.55;

pub const ORB_ALPHA: f32 = 0.75;

// Cumulative pointer parallax per move event (no decay)
pub const ORB_PARALLAX_ANGLE_COEFF: f32 = 0.002;
pub const ORB_PARALLAX_DIST_COEFF: f32 = 0.2;

// Pointer activity levels for the warp attractor blend
pub const POINTER_ENGAGED: f32 = 1.0;
pub const POINTER_RELEASED: f32 = 0.6;
pub const POINTER_GONE: f32 = 0.0;
