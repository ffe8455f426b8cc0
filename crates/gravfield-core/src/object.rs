//! Entity records and the store that issues their identity tokens.

use serde::{Deserialize, Serialize};

use crate::mesh::MeshHandle;
use crate::render::DrawItem;
use crate::types::{Color, RigidBody2D, Transform2D};

/// Identity token of a [`GameObject`]. Unique within the issuing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameObjectId(pub u32);

impl std::fmt::Display for GameObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "O{}", self.0)
    }
}

/// A drawable entity. Owned by value by exactly one collection.
///
/// Not `Clone`: a copy would share the original's identity token.
#[derive(Debug)]
pub struct GameObject {
    id: GameObjectId,
    pub transform: Transform2D,
    pub color: Color,
    pub rigid_body: RigidBody2D,
    pub mesh: MeshHandle,
}

impl GameObject {
    pub fn id(&self) -> GameObjectId {
        self.id
    }

    /// Everything the draw sink needs to record this object.
    pub fn draw_item(&self) -> DrawItem {
        DrawItem {
            transform: self.transform,
            color: self.color,
            mesh: self.mesh,
        }
    }
}

/// Issues identity tokens from a monotonically increasing counter.
/// Tokens are never reused, even after the object is dropped.
#[derive(Debug, Default)]
pub struct ObjectStore {
    next_id: u32,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an object with default transform, color, and rigid body.
    pub fn create(&mut self, mesh: MeshHandle) -> GameObject {
        let id = GameObjectId(self.next_id);
        self.next_id += 1;
        GameObject {
            id,
            transform: Transform2D::default(),
            color: Color::default(),
            rigid_body: RigidBody2D::default(),
            mesh,
        }
    }

    /// Number of tokens handed out so far.
    pub fn issued(&self) -> u32 {
        self.next_id
    }
}
