//! Simulation engine for gravfield.
//!
//! Owns the massive bodies and the probe grid, advances the gravity
//! integrator one frame at a time, re-samples the field, and hands both
//! entity sets to the presentation layer.

pub mod engine;
pub mod scene;
pub mod systems;

pub use engine::{FrameOutcome, SimConfig, SimulationEngine, SimulationState};
pub use gravfield_core as core;
