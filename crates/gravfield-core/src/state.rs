//! Frame snapshot: the observable simulation state after a frame.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::object::GameObjectId;
use crate::types::{Color, SimTime};

/// Complete observable state, built on demand by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub bodies: Vec<BodyView>,
    pub field: FieldView,
    pub conservation: ConservationView,
}

/// A massive body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyView {
    pub id: GameObjectId,
    pub position: DVec2,
    pub velocity: DVec2,
    pub mass: f64,
    pub color: Color,
}

/// Aggregate of the sampled probe grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldView {
    pub probe_count: usize,
    /// Longest glyph in the grid.
    pub max_glyph_length: f64,
    /// Mean glyph length across the grid.
    pub mean_glyph_length: f64,
}

/// Conserved quantities of the massive bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConservationView {
    pub momentum: DVec2,
    pub kinetic_energy: f64,
    pub potential_energy: f64,
    /// `None` when there are no bodies.
    pub center_of_mass: Option<DVec2>,
}

impl ConservationView {
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy + self.potential_energy
    }
}
