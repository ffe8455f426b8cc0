//! Snapshot system: reads the simulation state and builds a FrameSnapshot.
//!
//! Read-only; never modifies the state.

use gravfield_core::object::GameObject;
use gravfield_core::state::{BodyView, FieldView, FrameSnapshot};

use crate::engine::SimulationState;

use super::diagnostics;
use super::gravity::GravityPhysicsSystem;

pub fn build_snapshot(state: &SimulationState, gravity: &GravityPhysicsSystem) -> FrameSnapshot {
    FrameSnapshot {
        time: state.time,
        bodies: state.bodies.iter().map(build_body).collect(),
        field: build_field(&state.probes),
        conservation: diagnostics::measure(gravity, &state.bodies),
    }
}

fn build_body(body: &GameObject) -> BodyView {
    BodyView {
        id: body.id(),
        position: body.transform.translation,
        velocity: body.rigid_body.velocity,
        mass: body.rigid_body.mass(),
        color: body.color,
    }
}

fn build_field(probes: &[GameObject]) -> FieldView {
    if probes.is_empty() {
        return FieldView::default();
    }
    let lengths = probes.iter().map(|p| p.transform.scale.x);
    FieldView {
        probe_count: probes.len(),
        max_glyph_length: lengths.clone().fold(f64::NEG_INFINITY, f64::max),
        mean_glyph_length: lengths.sum::<f64>() / probes.len() as f64,
    }
}
