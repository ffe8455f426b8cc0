//! Simulation constants and tuning parameters.

/// Frame rate the driver targets (Hz).
pub const FRAME_RATE: u32 = 60;

/// Wall-clock step the integrator advances per rendered frame (seconds).
pub const FRAME_DT: f64 = 1.0 / FRAME_RATE as f64;

/// Euler sub-steps per frame.
pub const SUBSTEPS: u32 = 5;

/// Gravitational strength used by the default scene.
pub const GRAVITY_STRENGTH: f64 = 0.81;

/// Squared distance below which a pair exerts no force on each other.
/// Non-physical cutoff: keeps the division finite when bodies overlap.
pub const SINGULARITY_EPSILON: f64 = 1e-10;

/// Default RNG seed for scattered scenes.
pub const DEFAULT_SEED: u64 = 42;

// --- Field glyphs ---

/// Smallest glyph length (zero field).
pub const FIELD_BASE_SIZE: f64 = 0.005;

/// Extra glyph length reached at saturation.
pub const FIELD_SIZE_RANGE: f64 = 0.045;

/// `ln(|f| + 1)` is divided by this before clamping to [0, 1].
pub const FIELD_LOG_NORMALIZER: f64 = 3.0;

// --- Scene layout ---

/// Probes per side of the square sampling grid.
pub const GRID_COUNT: u32 = 40;

/// Largest grid side a scene accepts (about a million probes).
pub const MAX_GRID_COUNT: u32 = 1024;

/// Sides of the polygon used to draw massive bodies.
pub const CIRCLE_SIDES: u32 = 64;

/// Uniform draw scale of massive bodies.
pub const BODY_SCALE: f64 = 0.05;

/// Initial uniform scale of probe glyphs.
pub const PROBE_SCALE: f64 = 0.005;

/// Offset applied to the glyph square so rotation pivots at its left edge.
pub const GLYPH_OFFSET: [f32; 2] = [0.5, 0.0];

/// Smallest polygon the circle builder accepts.
pub const MIN_CIRCLE_SIDES: u32 = 3;
