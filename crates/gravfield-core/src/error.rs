//! Precondition failures surfaced by construction and update calls.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("mass must be finite and positive, got {0}")]
    InvalidMass(f64),

    #[error("color components must be within [0, 1], got ({0}, {1}, {2})")]
    InvalidColor(f32, f32, f32),

    #[error("gravitational strength must be finite and non-negative, got {0}")]
    InvalidStrength(f64),

    #[error("substeps must be at least 1")]
    ZeroSubsteps,

    #[error("invalid time step {0}")]
    InvalidTimeStep(f64),

    #[error("a polygon needs at least {min} sides, got {got}")]
    TooFewSides { got: u32, min: u32 },

    #[error("invalid field style: {0}")]
    InvalidFieldStyle(String),

    #[error("invalid scene: {0}")]
    InvalidScene(String),
}
