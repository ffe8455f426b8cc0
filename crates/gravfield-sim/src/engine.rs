//! Simulation engine and frame driver.
//!
//! `SimulationEngine` owns the simulation state and the two systems, and
//! advances them one presented frame at a time. It never touches a window or
//! device directly; the presentation layer is reached only through the
//! `FrameSource` / `DrawSink` capabilities, which keeps it fully headless and
//! deterministic under test.

use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use gravfield_core::constants::{DEFAULT_SEED, FRAME_DT, GRAVITY_STRENGTH, SUBSTEPS};
use gravfield_core::error::SimError;
use gravfield_core::object::{GameObject, ObjectStore};
use gravfield_core::render::{DrawItem, DrawSink, FrameSource, MeshFactory};
use gravfield_core::state::FrameSnapshot;
use gravfield_core::types::SimTime;

use crate::scene::{self, SceneConfig};
use crate::systems;
use crate::systems::gravity::GravityPhysicsSystem;
use crate::systems::vector_field::{FieldStyle, Vec2FieldSystem};

/// Start-up configuration. Missing fields in a config file fall back to the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Gravitational strength `G`.
    pub strength: f64,
    /// Simulated seconds per presented frame.
    pub frame_dt: f64,
    /// Euler sub-steps per frame.
    pub substeps: u32,
    /// RNG seed for scattered layouts. Same seed = same scene.
    pub seed: u64,
    pub field: FieldStyle,
    pub scene: SceneConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            strength: GRAVITY_STRENGTH,
            frame_dt: FRAME_DT,
            substeps: SUBSTEPS,
            seed: DEFAULT_SEED,
            field: FieldStyle::default(),
            scene: SceneConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.substeps == 0 {
            return Err(SimError::ZeroSubsteps);
        }
        if !self.frame_dt.is_finite() || self.frame_dt <= 0.0 {
            return Err(SimError::InvalidTimeStep(self.frame_dt));
        }
        self.field.validate()
    }
}

/// Everything that changes from frame to frame.
///
/// `bodies` are force sources and sinks; `probes` only receive force.
#[derive(Debug, Default)]
pub struct SimulationState {
    pub bodies: Vec<GameObject>,
    pub probes: Vec<GameObject>,
    pub time: SimTime,
}

/// Advance the massive bodies by `dt` in `substeps` Euler steps.
pub fn integrate(
    gravity: &GravityPhysicsSystem,
    state: &mut SimulationState,
    dt: f64,
    substeps: u32,
) -> Result<(), SimError> {
    gravity.update(&mut state.bodies, dt, substeps)
}

/// Re-orient and re-size every probe glyph from the current body positions.
pub fn sample_field(
    field: &Vec2FieldSystem,
    gravity: &GravityPhysicsSystem,
    state: &mut SimulationState,
) {
    field.update(gravity, &state.bodies, &mut state.probes);
}

/// Result of one pass through the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Simulated, sampled, drawn, and presented.
    Rendered,
    /// No frame available; nothing advanced.
    Skipped,
}

/// The simulation engine. Owns the state and the systems.
pub struct SimulationEngine {
    config: SimConfig,
    gravity: GravityPhysicsSystem,
    field: Vec2FieldSystem,
    store: ObjectStore,
    state: SimulationState,
}

impl SimulationEngine {
    /// Validate `config`, create meshes through `meshes`, and spawn the scene.
    pub fn new(config: SimConfig, meshes: &mut impl MeshFactory) -> Result<Self, SimError> {
        config.validate()?;
        let gravity = GravityPhysicsSystem::new(config.strength)?;
        let field = Vec2FieldSystem::new(config.field)?;

        let mut store = ObjectStore::new();
        let scene = scene::build_scene(&config.scene, config.seed, meshes, &mut store)?;
        info!(
            bodies = scene.bodies.len(),
            probes = scene.probes.len(),
            strength = config.strength,
            substeps = config.substeps,
            "scene ready"
        );

        Ok(Self {
            gravity,
            field,
            store,
            state: SimulationState {
                bodies: scene.bodies,
                probes: scene.probes,
                time: SimTime::default(),
            },
            config,
        })
    }

    /// Run one iteration of the frame loop.
    ///
    /// When `frames` has no frame to give, the whole iteration is skipped:
    /// no integration, no sampling, no draws, and time does not advance.
    pub fn run_frame<F, D>(&mut self, frames: &mut F, sink: &mut D) -> Result<FrameOutcome, SimError>
    where
        F: FrameSource,
        D: DrawSink<F::Context>,
    {
        let Some(mut ctx) = frames.begin_frame() else {
            trace!(frame = self.state.time.frame, "no frame available, skipping");
            return Ok(FrameOutcome::Skipped);
        };

        if let Err(err) = self.step() {
            frames.end_frame(ctx);
            return Err(err);
        }

        sink.submit(&mut ctx, &draw_items(&self.state.bodies));
        sink.submit(&mut ctx, &draw_items(&self.state.probes));
        frames.end_frame(ctx);

        self.state.time.advance(self.config.frame_dt);
        Ok(FrameOutcome::Rendered)
    }

    /// Integrate one frame and re-sample the field, without drawing.
    fn step(&mut self) -> Result<(), SimError> {
        integrate(
            &self.gravity,
            &mut self.state,
            self.config.frame_dt,
            self.config.substeps,
        )?;
        sample_field(&self.field, &self.gravity, &mut self.state);
        Ok(())
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        systems::snapshot::build_snapshot(&self.state, &self.gravity)
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn gravity(&self) -> &GravityPhysicsSystem {
        &self.gravity
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of identity tokens issued while building the scene.
    pub fn objects_created(&self) -> u32 {
        self.store.issued()
    }
}

fn draw_items(objects: &[GameObject]) -> Vec<DrawItem> {
    objects.iter().map(GameObject::draw_item).collect()
}
