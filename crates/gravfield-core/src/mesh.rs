//! Mesh builders and the in-memory mesh arena.
//!
//! Builders return flat triangle lists (three vertices per triangle) and never
//! touch a device; handing the vertices to a [`MeshFactory`] is the caller's job.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::MIN_CIRCLE_SIDES;
use crate::error::SimError;
use crate::render::MeshFactory;

/// Opaque index of a mesh owned by a factory. Many entities may share one.
/// Arena-sized, so any arena position fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshHandle(pub usize);

/// Unit square `[-0.5, 0.5]²` as two triangles, shifted by `offset`.
pub fn square_vertices(offset: Vec2) -> Vec<Vec2> {
    [
        Vec2::new(-0.5, -0.5),
        Vec2::new(0.5, 0.5),
        Vec2::new(-0.5, 0.5),
        Vec2::new(-0.5, -0.5),
        Vec2::new(0.5, -0.5),
        Vec2::new(0.5, 0.5),
    ]
    .into_iter()
    .map(|v| v + offset)
    .collect()
}

/// Regular polygon inscribed in the unit circle, fanned around the origin.
///
/// Emits `num_sides` triangles `(p[i], p[i + 1], center)`.
pub fn circle_vertices(num_sides: u32) -> Result<Vec<Vec2>, SimError> {
    if num_sides < MIN_CIRCLE_SIDES {
        return Err(SimError::TooFewSides {
            got: num_sides,
            min: MIN_CIRCLE_SIDES,
        });
    }

    let n = num_sides as usize;
    let rim: Vec<Vec2> = (0..n)
        .map(|i| {
            let angle = i as f32 * TAU / num_sides as f32;
            Vec2::new(angle.cos(), angle.sin())
        })
        .collect();

    let mut vertices = Vec::with_capacity(n * 3);
    for i in 0..n {
        vertices.push(rim[i]);
        vertices.push(rim[(i + 1) % n]);
        vertices.push(Vec2::ZERO);
    }
    Ok(vertices)
}

/// Arena of immutable meshes addressed by [`MeshHandle`].
///
/// Stands in for a GPU mesh factory in headless runs and tests.
#[derive(Debug, Default)]
pub struct MeshArena {
    meshes: Vec<Vec<Vec2>>,
}

impl MeshArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, handle: MeshHandle) -> Option<&[Vec2]> {
        self.meshes.get(handle.0).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

impl MeshFactory for MeshArena {
    fn create(&mut self, vertices: &[Vec2]) -> MeshHandle {
        let handle = MeshHandle(self.meshes.len());
        self.meshes.push(vertices.to_vec());
        handle
    }
}
