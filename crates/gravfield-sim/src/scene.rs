//! Scene setup: meshes, massive bodies, and the probe grid.
//!
//! Builds the two entity collections the engine owns. Meshes are created
//! once here and shared by handle.

use glam::{DVec2, Vec2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use gravfield_core::constants::*;
use gravfield_core::error::SimError;
use gravfield_core::mesh::{circle_vertices, square_vertices, MeshHandle};
use gravfield_core::object::{GameObject, ObjectStore};
use gravfield_core::render::MeshFactory;
use gravfield_core::types::{Color, RigidBody2D};

/// Initial state of one massive body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub position: DVec2,
    pub velocity: DVec2,
    pub mass: f64,
    pub color: Color,
}

/// How the massive bodies are placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyLayout {
    /// Bodies listed one by one.
    Explicit { bodies: Vec<BodyConfig> },
    /// `count` bodies drawn from the seeded RNG.
    Scattered {
        count: u32,
        mass_min: f64,
        mass_max: f64,
        /// Positions are uniform in `[-extent, extent]²`.
        extent: f64,
        /// Velocities are uniform in `[-speed, speed]²`.
        speed: f64,
    },
}

impl Default for BodyLayout {
    /// Red and blue bodies of unit mass on crossing paths.
    fn default() -> Self {
        BodyLayout::Explicit {
            bodies: vec![
                BodyConfig {
                    position: DVec2::new(0.5, 0.5),
                    velocity: DVec2::new(-0.5, 0.0),
                    mass: 1.0,
                    color: Color::RED,
                },
                BodyConfig {
                    position: DVec2::new(-0.45, -0.25),
                    velocity: DVec2::new(0.5, 0.0),
                    mass: 1.0,
                    color: Color::BLUE,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub bodies: BodyLayout,
    /// Probes per side of the sampling grid.
    pub grid_count: u32,
    pub circle_sides: u32,
    pub body_scale: f64,
    pub probe_scale: f64,
    /// Shift applied to the glyph square.
    pub glyph_offset: [f32; 2],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            bodies: BodyLayout::default(),
            grid_count: GRID_COUNT,
            circle_sides: CIRCLE_SIDES,
            body_scale: BODY_SCALE,
            probe_scale: PROBE_SCALE,
            glyph_offset: GLYPH_OFFSET,
        }
    }
}

/// Entity collections ready for the engine.
#[derive(Debug)]
pub struct Scene {
    pub bodies: Vec<GameObject>,
    pub probes: Vec<GameObject>,
    pub circle_mesh: MeshHandle,
    pub square_mesh: MeshHandle,
}

/// Create the meshes and spawn bodies and probes.
///
/// `seed` only matters for [`BodyLayout::Scattered`].
pub fn build_scene(
    config: &SceneConfig,
    seed: u64,
    meshes: &mut impl MeshFactory,
    store: &mut ObjectStore,
) -> Result<Scene, SimError> {
    if !(config.body_scale.is_finite() && config.probe_scale.is_finite()) {
        return Err(SimError::InvalidScene("scales must be finite".into()));
    }
    if config.grid_count > MAX_GRID_COUNT {
        return Err(SimError::InvalidScene(format!(
            "grid_count must be at most {MAX_GRID_COUNT}, got {}",
            config.grid_count
        )));
    }

    let circle_mesh = meshes.create(&circle_vertices(config.circle_sides)?);
    let offset = Vec2::from_array(config.glyph_offset);
    let square_mesh = meshes.create(&square_vertices(offset));

    let body_configs = match &config.bodies {
        BodyLayout::Explicit { bodies } => bodies.clone(),
        BodyLayout::Scattered {
            count,
            mass_min,
            mass_max,
            extent,
            speed,
        } => scatter_bodies(*count, *mass_min, *mass_max, *extent, *speed, seed)?,
    };

    let mut bodies = Vec::with_capacity(body_configs.len());
    for cfg in &body_configs {
        bodies.push(spawn_body(store, circle_mesh, cfg, config.body_scale)?);
    }

    let probes = spawn_probe_grid(store, square_mesh, config.grid_count, config.probe_scale);

    Ok(Scene {
        bodies,
        probes,
        circle_mesh,
        square_mesh,
    })
}

/// Spawn a massive body drawn with the circle mesh.
pub fn spawn_body(
    store: &mut ObjectStore,
    mesh: MeshHandle,
    cfg: &BodyConfig,
    scale: f64,
) -> Result<GameObject, SimError> {
    let color = Color::new(cfg.color.r, cfg.color.g, cfg.color.b)?;
    let rigid_body = RigidBody2D::new(cfg.mass, cfg.velocity)?;

    let mut body = store.create(mesh);
    body.transform.translation = cfg.position;
    body.transform.scale = DVec2::splat(scale);
    body.color = color;
    body.rigid_body = rigid_body;
    Ok(body)
}

/// Spawn `grid_count²` white probes at cell centers of `[-1, 1]²`, column-major.
pub fn spawn_probe_grid(
    store: &mut ObjectStore,
    mesh: MeshHandle,
    grid_count: u32,
    scale: f64,
) -> Vec<GameObject> {
    let side = grid_count as usize;
    let mut probes = Vec::with_capacity(side.saturating_mul(side));
    for i in 0..grid_count {
        for j in 0..grid_count {
            let mut probe = store.create(mesh);
            probe.transform.translation = grid_position(i, j, grid_count);
            probe.transform.scale = DVec2::splat(scale);
            probe.color = Color::WHITE;
            probes.push(probe);
        }
    }
    probes
}

/// Center of grid cell `(i, j)` in an `n x n` grid over `[-1, 1]²`.
pub fn grid_position(i: u32, j: u32, n: u32) -> DVec2 {
    let cell = 2.0 / n as f64;
    DVec2::new(
        -1.0 + (i as f64 + 0.5) * cell,
        -1.0 + (j as f64 + 0.5) * cell,
    )
}

fn scatter_bodies(
    count: u32,
    mass_min: f64,
    mass_max: f64,
    extent: f64,
    speed: f64,
    seed: u64,
) -> Result<Vec<BodyConfig>, SimError> {
    if !(mass_min.is_finite() && mass_max.is_finite()) || mass_min <= 0.0 || mass_min > mass_max {
        return Err(SimError::InvalidScene(format!(
            "scattered masses need 0 < mass_min <= mass_max, got {mass_min}..{mass_max}"
        )));
    }
    if !(extent.is_finite() && speed.is_finite()) || extent < 0.0 || speed < 0.0 {
        return Err(SimError::InvalidScene(
            "extent and speed must be finite and non-negative".into(),
        ));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let bodies = (0..count)
        .map(|_| BodyConfig {
            position: DVec2::new(
                rng.gen_range(-extent..=extent),
                rng.gen_range(-extent..=extent),
            ),
            velocity: DVec2::new(rng.gen_range(-speed..=speed), rng.gen_range(-speed..=speed)),
            mass: rng.gen_range(mass_min..=mass_max),
            color: Color {
                r: rng.gen(),
                g: rng.gen(),
                b: rng.gen(),
            },
        })
        .collect();
    Ok(bodies)
}
